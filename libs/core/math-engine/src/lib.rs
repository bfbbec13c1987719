// [libs/core/math-engine/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: CORE MATH MASTER HUB (V3.0 - VAULT SYNC)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: ORQUESTACIÓN DE PRIMITIVAS ARITMÉTICAS Y GEOMÉTRICAS
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. AFFINE STRATA: Publica la ley de grupo afín y la multiplicación
 *    de puntos arbitrarios requerida por el motor de cifrado EC.
 * 2. NOMINAL PRELUDE ALIGNMENT: Centraliza la nomenclatura nominal
 *    para los estratos superiores (codec y cipher).
 * 3. HYGIENE: Cero advertencias de compilación y cumplimiento TSDoc.
 *
 * # Mathematical Proof (Modular Integrity):
 * Este aparato actúa como el nodo raíz del grafo matemático, asegurando
 * que la ley de grupo y la aritmética de campo sean bit-perfectas para
 * todos los consumidores del monorepo.
 * =================================================================
 */

/// Conversión Big-Endian de ancho fijo y Euclides extendido.
pub mod arithmetic;
/// Leyes de grupo afines y multiplicación escalar double-and-add.
pub mod curve;
/// Catálogo de fallos aritméticos y geométricos del sistema.
pub mod errors;
/// Constantes del cuerpo Fp y raíz cuadrada modular.
pub mod field;
/// Motores de resumen (Digest): SHA-256, doble SHA-256, Hash160.
pub mod hashing;
/// Gestión segura de escalares secretos (Private Keys).
pub mod private_key;
/// Serialización SEC1 y multiplicación de puntos arbitrarios (Public Keys).
pub mod public_key;

/**
 * PRELUDIO MATEMÁTICO SOBERANO
 *
 * Única autoridad de importación autorizada para los estratos superiores
 * (L1-Codec y L1-Cipher). Centraliza la nomenclatura nominal.
 */
pub mod prelude {
    // Aritmética de precisión arbitraria
    pub use crate::arithmetic::{
        integer_from_bytes_be, integer_to_fixed_bytes_be, integer_to_u256_be, mod_inv,
        reduce_euclidean, U256_BYTE_SIZE,
    };

    // Estructuras geométricas y constantes de campo
    pub use crate::curve::{generator_point, AffinePoint, UnifiedCurveEngine};
    pub use crate::field::{
        curve_equation_rhs, sqrt_mod_prime, GENERATOR_POINT_X, GENERATOR_POINT_Y,
        SECP256K1_CURVE_ORDER, SECP256K1_FIELD_PRIME,
    };

    // Primitivas de identidad criptográfica
    pub use crate::errors::MathError;
    pub use crate::hashing::{checksum, double_sha256, hash160, sha256, CHECKSUM_BYTE_LENGTH};
    pub use crate::private_key::PrivateKey;
    pub use crate::public_key::{
        compress_public_key, derive_public_key, multiply_public_key, point_from_uncompressed_bytes,
        serialize_point, uncompress_public_key, PublicKeyForm, COMPRESSED_PUBLIC_KEY_SIZE,
        UNCOMPRESSED_PUBLIC_KEY_SIZE,
    };
}
