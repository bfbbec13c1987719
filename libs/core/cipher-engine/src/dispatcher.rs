// [libs/core/cipher-engine/src/dispatcher.rs]
/*!
 * =================================================================
 * APARATO: ENVELOPE DISPATCHER (V3.1 - PREFIX ROUTING)
 * CLASIFICACIÓN: CORE CIPHER (ESTRATO L1)
 * RESPONSABILIDAD: ENRUTADO DE SOBRES CIFRADOS POR PREFIJO
 *
 * VISION HIPER-HOLÍSTICA:
 * Un sobre cifrado mide 39 bytes de payload bajo Base58Check. Los dos
 * primeros bytes seleccionan la rama (0x0142 no-EC / 0x0143 EC). Las
 * banderas del conjunto ilegal se rechazan aquí, antes de que cualquier
 * rama invierta trabajo scrypt.
 * =================================================================
 */

use crate::artifacts::DecryptedKey;
use crate::ec_multiply::decrypt_ec;
use crate::errors::CipherError;
use crate::flags::{is_illegal_flag, EC_ENVELOPE_PREFIX, NON_EC_ENVELOPE_PREFIX};
use crate::non_ec::decrypt_non_ec;
use qvault_core_codec::prelude::{check_decode, Network};
use tracing::instrument;

/// Ancho del payload de un sobre cifrado (ambas ramas).
const ENCRYPTED_ENVELOPE_PAYLOAD_SIZE: usize = 39;

/**
 * Descifra un sobre cifrado bajo una frase maestra.
 *
 * Decodifica Base58Check, certifica el ancho canónico, rechaza las
 * banderas ilegales y enruta a la rama que el prefijo selecciona.
 *
 * # Errors:
 * `CipherError::InvalidLength`, `CipherError::InvalidFlag` o
 * `CipherError::InvalidPrefix` ante sobres malformados;
 * `CipherError::IncorrectPassphrase` cuando el material es legal pero
 * la frase no corresponde.
 */
#[instrument(level = "trace", skip_all)]
pub fn bip38_decrypt(
    encrypted_wif_text: &str,
    passphrase: &str,
    network: Network,
) -> Result<DecryptedKey, CipherError> {
    let envelope_payload = check_decode(encrypted_wif_text)?;
    if envelope_payload.len() != ENCRYPTED_ENVELOPE_PAYLOAD_SIZE {
        return Err(CipherError::InvalidLength {
            context: "encrypted envelope",
            expected: ENCRYPTED_ENVELOPE_PAYLOAD_SIZE,
            got: envelope_payload.len(),
        });
    }

    // Las banderas ilegales se sentencian antes de cualquier derivación.
    let flag_byte = envelope_payload[2];
    if is_illegal_flag(flag_byte) {
        return Err(CipherError::InvalidFlag { got: flag_byte });
    }

    if envelope_payload[..2] == NON_EC_ENVELOPE_PREFIX {
        decrypt_non_ec(&envelope_payload, passphrase, network)
    } else if envelope_payload[..2] == EC_ENVELOPE_PREFIX {
        decrypt_ec(&envelope_payload, passphrase, network)
    } else {
        Err(CipherError::InvalidPrefix)
    }
}
