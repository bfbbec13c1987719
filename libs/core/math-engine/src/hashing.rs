// [libs/core/math-engine/src/hashing.rs]
/*!
 * =================================================================
 * APARATO: HASHING ENGINE (V3.0 - VAULT STANDARD)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: RESÚMENES CRIPTOGRÁFICOS DEL PROTOCOLO DE SOBRES
 *
 * VISION HIPER-HOLÍSTICA:
 * Implementa las funciones de resumen (Digest) requeridas por el
 * protocolo de llaves y direcciones. Utiliza implementaciones Rust
 * puras para evitar dependencias de C (OpenSSL) y facilitar la
 * compilación cruzada (MUSL).
 * =================================================================
 */

use ripemd::Ripemd160;
use sha2::{Digest, Sha256};

/// Longitud en bytes del checksum truncado de doble SHA-256.
pub const CHECKSUM_BYTE_LENGTH: usize = 4;

/// SHA-256 simple sobre un buffer arbitrario.
#[inline(always)]
#[must_use]
pub fn sha256(data: &[u8]) -> [u8; 32] {
    let mut output = [0u8; 32];
    output.copy_from_slice(&Sha256::digest(data));
    output
}

/// Doble SHA-256: $SHA256(SHA256(data))$.
#[inline(always)]
#[must_use]
pub fn double_sha256(data: &[u8]) -> [u8; 32] {
    sha256(&sha256(data))
}

/// Realiza un HASH160 estándar.
/// Algoritmo: $RIPEMD160(SHA256(data))$
///
/// Utilizado para generar el identificador de llave pública que forma
/// parte de las direcciones P2PKH.
#[inline(always)]
#[must_use]
pub fn hash160(data: &[u8]) -> [u8; 20] {
    // Paso 1: SHA-256
    let sha_result = Sha256::digest(data);

    // Paso 2: RIPEMD-160
    let mut ripe_hasher = Ripemd160::new();
    ripe_hasher.update(sha_result);

    let mut output = [0u8; 20];
    output.copy_from_slice(&ripe_hasher.finalize());
    output
}

/// Checksum de sobre: primeros 4 bytes de la doble SHA-256.
#[inline(always)]
#[must_use]
pub fn checksum(data: &[u8]) -> [u8; 4] {
    let mut output = [0u8; 4];
    output.copy_from_slice(&double_sha256(data)[..CHECKSUM_BYTE_LENGTH]);
    output
}
