// [libs/core/math-engine/src/public_key.rs]
/*!
 * =================================================================
 * APARATO: PUBLIC KEY ENGINE (V3.3 - SEC1 SEALED)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: SERIALIZACIÓN SEC1 Y MULTIPLICACIÓN DE PUNTOS ARBITRARIOS
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. DUAL FORM SOVEREIGNTY: Toda llave pública existe en dos
 *    proyecciones (65 B no comprimida / 33 B comprimida); la forma
 *    elegida altera el hash160 y por tanto la dirección derivada.
 * 2. LENIENT DECODE: La descompresión reconstruye la ordenada por raíz
 *    modular sin certificar pertenencia a la curva; la validez final la
 *    establece la verificación de dirección del estrato de cifrado.
 * 3. NOMINAL PURITY: Erradicación de abreviaciones en prefijos y buffers.
 *
 * # Mathematical Proof (Descompresión):
 * Dado $x$ y el prefijo de paridad $\rho \in \{02, 03\}$, la ordenada es
 * $y = (x^3 + 7)^{(p+1)/4} \bmod p$, negada módulo $p$ si su paridad
 * difiere de $\rho - 2$.
 * =================================================================
 */

use crate::arithmetic::{integer_from_bytes_be, integer_to_u256_be, reduce_euclidean};
use crate::curve::{generator_point, AffinePoint, UnifiedCurveEngine};
use crate::errors::MathError;
use crate::field::{curve_equation_rhs, sqrt_mod_prime, SECP256K1_FIELD_PRIME};
use crate::private_key::PrivateKey;
use num_bigint::BigInt;
use serde::Serialize;
use tracing::instrument;

/// Prefijo SEC1 de llave comprimida con ordenada par.
pub const EVEN_COMPRESSED_PUBLIC_KEY_PREFIX: u8 = 0x02;
/// Prefijo SEC1 de llave comprimida con ordenada impar.
pub const ODD_COMPRESSED_PUBLIC_KEY_PREFIX: u8 = 0x03;
/// Prefijo SEC1 de llave no comprimida.
pub const UNCOMPRESSED_PUBLIC_KEY_PREFIX: u8 = 0x04;
/// Longitud canónica de la proyección comprimida.
pub const COMPRESSED_PUBLIC_KEY_SIZE: usize = 33;
/// Longitud canónica de la proyección no comprimida.
pub const UNCOMPRESSED_PUBLIC_KEY_SIZE: usize = 65;

/// Proyección de serialización de una llave pública.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PublicKeyForm {
    /// 65 bytes: 0x04 ‖ X ‖ Y.
    Uncompressed,
    /// 33 bytes: (0x02 | 0x03) ‖ X.
    Compressed,
}

impl PublicKeyForm {
    /// Etiqueta nominal de la proyección.
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            PublicKeyForm::Uncompressed => "uncompressed",
            PublicKeyForm::Compressed => "compressed",
        }
    }
}

/**
 * Reconstruye un punto afín desde la proyección no comprimida (65 B).
 *
 * No certifica pertenencia a la curva: el material ilegítimo produce
 * derivaciones cuya dirección jamás superará la verificación de hash.
 */
pub fn point_from_uncompressed_bytes(public_key_bytes: &[u8]) -> Result<AffinePoint, MathError> {
    if public_key_bytes.len() != UNCOMPRESSED_PUBLIC_KEY_SIZE {
        return Err(MathError::InvalidLength {
            expected: UNCOMPRESSED_PUBLIC_KEY_SIZE,
            got: public_key_bytes.len(),
        });
    }
    if public_key_bytes[0] != UNCOMPRESSED_PUBLIC_KEY_PREFIX {
        return Err(MathError::InvalidPointEncoding(
            "SEC1_PREFIX_FAULT: se esperaba 0x04".into(),
        ));
    }

    Ok(AffinePoint {
        x: integer_from_bytes_be(&public_key_bytes[1..33]),
        y: integer_from_bytes_be(&public_key_bytes[33..65]),
    })
}

/**
 * Serializa un punto afín a la proyección SEC1 solicitada.
 */
pub fn serialize_point(point: &AffinePoint, form: PublicKeyForm) -> Result<Vec<u8>, MathError> {
    let abscissa_bytes = integer_to_u256_be(&point.x)?;
    match form {
        PublicKeyForm::Uncompressed => {
            let ordinate_bytes = integer_to_u256_be(&point.y)?;
            let mut output = Vec::with_capacity(UNCOMPRESSED_PUBLIC_KEY_SIZE);
            output.push(UNCOMPRESSED_PUBLIC_KEY_PREFIX);
            output.extend_from_slice(&abscissa_bytes);
            output.extend_from_slice(&ordinate_bytes);
            Ok(output)
        }
        PublicKeyForm::Compressed => {
            let parity_prefix = if (&point.y % BigInt::from(2u32)) == BigInt::from(1u32) {
                ODD_COMPRESSED_PUBLIC_KEY_PREFIX
            } else {
                EVEN_COMPRESSED_PUBLIC_KEY_PREFIX
            };
            let mut output = Vec::with_capacity(COMPRESSED_PUBLIC_KEY_SIZE);
            output.push(parity_prefix);
            output.extend_from_slice(&abscissa_bytes);
            Ok(output)
        }
    }
}

/**
 * Descompresión SEC1: 33 bytes -> 65 bytes.
 *
 * # Errors:
 * `MathError::InvalidLength` o `MathError::InvalidPointEncoding` ante
 * material que no respeta el formato comprimido.
 */
#[instrument(level = "trace", skip_all)]
pub fn uncompress_public_key(public_key_bytes: &[u8]) -> Result<[u8; 65], MathError> {
    if public_key_bytes.len() != COMPRESSED_PUBLIC_KEY_SIZE {
        return Err(MathError::InvalidLength {
            expected: COMPRESSED_PUBLIC_KEY_SIZE,
            got: public_key_bytes.len(),
        });
    }
    let parity_prefix = public_key_bytes[0];
    if parity_prefix != EVEN_COMPRESSED_PUBLIC_KEY_PREFIX
        && parity_prefix != ODD_COMPRESSED_PUBLIC_KEY_PREFIX
    {
        return Err(MathError::InvalidPointEncoding(
            "SEC1_PREFIX_FAULT: se esperaba 0x02 o 0x03".into(),
        ));
    }

    let abscissa = integer_from_bytes_be(&public_key_bytes[1..]);
    let expected_parity = BigInt::from((parity_prefix - EVEN_COMPRESSED_PUBLIC_KEY_PREFIX) as u32);

    let mut ordinate = sqrt_mod_prime(&curve_equation_rhs(&abscissa));
    if (&ordinate % BigInt::from(2u32)) != expected_parity {
        ordinate = reduce_euclidean(&(-ordinate), &SECP256K1_FIELD_PRIME);
    }

    let mut output = [0u8; 65];
    output[0] = UNCOMPRESSED_PUBLIC_KEY_PREFIX;
    output[1..33].copy_from_slice(&integer_to_u256_be(&abscissa)?);
    output[33..65].copy_from_slice(&integer_to_u256_be(&ordinate)?);
    Ok(output)
}

/**
 * Compresión SEC1: 65 bytes -> 33 bytes.
 */
pub fn compress_public_key(public_key_bytes: &[u8]) -> Result<[u8; 33], MathError> {
    let point = point_from_uncompressed_bytes(public_key_bytes)?;
    let serialized = serialize_point(&point, PublicKeyForm::Compressed)?;
    let mut output = [0u8; 33];
    output.copy_from_slice(&serialized);
    Ok(output)
}

/**
 * Deriva la llave pública $Q = k \cdot G$ en la proyección solicitada.
 */
#[instrument(level = "trace", skip_all)]
pub fn derive_public_key(
    private_key: &PrivateKey,
    form: PublicKeyForm,
) -> Result<Vec<u8>, MathError> {
    let public_point =
        UnifiedCurveEngine::scalar_multiply(&generator_point(), &private_key.as_scalar())?;
    serialize_point(&public_point, form)
}

/**
 * Multiplica un punto público arbitrario por un escalar: $Q' = s \cdot Q$.
 *
 * Acepta ambas proyecciones SEC1 de entrada; la comprimida se expande
 * por raíz modular antes de la escalera binaria.
 *
 * # Errors:
 * `MathError::ScalarOutOfRange` si $s \notin (0, n)$; errores de
 * codificación SEC1 ante material ilegal.
 */
#[instrument(level = "trace", skip_all)]
pub fn multiply_public_key(
    public_key_bytes: &[u8],
    scalar_bytes: &[u8],
    form: PublicKeyForm,
) -> Result<Vec<u8>, MathError> {
    let uncompressed_material: [u8; 65] = if public_key_bytes.len() == COMPRESSED_PUBLIC_KEY_SIZE {
        uncompress_public_key(public_key_bytes)?
    } else {
        let mut buffer = [0u8; 65];
        let point = point_from_uncompressed_bytes(public_key_bytes)?;
        buffer.copy_from_slice(&serialize_point(&point, PublicKeyForm::Uncompressed)?);
        buffer
    };

    let base_point = point_from_uncompressed_bytes(&uncompressed_material)?;
    let scalar_value = integer_from_bytes_be(scalar_bytes);
    let product_point = UnifiedCurveEngine::scalar_multiply(&base_point, &scalar_value)?;
    serialize_point(&product_point, form)
}
