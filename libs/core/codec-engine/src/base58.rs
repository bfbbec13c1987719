// [libs/core/codec-engine/src/base58.rs]
/*!
 * =================================================================
 * APARATO: BASE58 CODEC ENGINE (V3.0 - CHECK DISCIPLINE)
 * CLASIFICACIÓN: CORE CODEC (ESTRATO L1)
 * RESPONSABILIDAD: CODIFICACIÓN BASE58 CRUDA Y CON CHECKSUM
 *
 * VISION HIPER-HOLÍSTICA:
 * El alfabeto estándar (sin 0, O, I, l) y la preservación de ceros a la
 * izquierda como caracteres '1' los garantiza el motor 'bs58'. La
 * variante Check adjunta los primeros 4 bytes de la doble SHA-256 y los
 * verifica y retira en la decodificación.
 * =================================================================
 */

use crate::errors::CodecError;

/// Codifica un buffer arbitrario en Base58 crudo.
#[inline(always)]
#[must_use]
pub fn encode(payload: &[u8]) -> String {
    bs58::encode(payload).into_string()
}

/// Decodifica Base58 crudo a bytes.
///
/// # Errors:
/// `CodecError::Base58Fault` ante caracteres fuera del alfabeto.
pub fn decode(encoded_text: &str) -> Result<Vec<u8>, CodecError> {
    Ok(bs58::decode(encoded_text).into_vec()?)
}

/// Codifica Base58Check: Base58(payload ‖ checksum(payload)).
#[inline(always)]
#[must_use]
pub fn check_encode(payload: &[u8]) -> String {
    bs58::encode(payload).with_check().into_string()
}

/// Decodifica Base58Check, verificando y retirando el checksum.
///
/// # Errors:
/// `CodecError::Base58Fault` ante alfabeto ilegal o checksum corrupto.
pub fn check_decode(encoded_text: &str) -> Result<Vec<u8>, CodecError> {
    Ok(bs58::decode(encoded_text).with_check(None).into_vec()?)
}
