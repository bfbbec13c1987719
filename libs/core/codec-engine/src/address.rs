// [libs/core/codec-engine/src/address.rs]
/*!
 * =================================================================
 * APARATO: P2PKH ADDRESS GENERATOR (V3.1 - DUAL NET)
 * CLASIFICACIÓN: CORE CODEC (ESTRATO L1)
 * RESPONSABILIDAD: TRANSFORMACIÓN DE LLAVES PÚBLICAS A BASE58CHECK
 *
 * VISION HIPER-HOLÍSTICA:
 * Implementa la derivación de direcciones P2PKH sobre serialización
 * nativa en el Stack. La proyección elegida de la llave (comprimida o
 * no) altera el hash160 y por tanto la dirección resultante; los sobres
 * cifrados comprometen los bytes ASCII de esta dirección.
 * =================================================================
 */

use crate::network::Network;
use qvault_core_math::hashing::hash160;

/// Longitud canónica del payload de dirección: 1 byte de versión + 20 de hash.
const ADDRESS_PAYLOAD_SIZE: usize = 21;

/**
 * Transforma una llave pública serializada en una dirección P2PKH.
 *
 * Acepta cualquiera de las dos proyecciones SEC1 (33 o 65 bytes); el
 * hash160 se computa sobre los bytes tal como llegan.
 */
#[must_use]
pub fn public_key_to_address(public_key_bytes: &[u8], network: Network) -> String {
    let public_key_hash = hash160(public_key_bytes);

    let mut address_payload = [0u8; ADDRESS_PAYLOAD_SIZE];
    address_payload[0] = network.address_version_byte();
    address_payload[1..21].copy_from_slice(&public_key_hash);

    // bs58::encode realiza la construcción de checksum y encoding
    bs58::encode(address_payload).with_check().into_string()
}
