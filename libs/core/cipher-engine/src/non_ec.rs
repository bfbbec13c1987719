// [libs/core/cipher-engine/src/non_ec.rs]
/*!
 * =================================================================
 * APARATO: NON-EC VAULT ENGINE (V3.3 - ADDRESS HASH SEALED)
 * CLASIFICACIÓN: CORE CIPHER (ESTRATO L1)
 * RESPONSABILIDAD: RAMA NO-EC-MULTIPLICADA DEL PROTOCOLO (SOBRE 0x0142)
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. FORM INFERENCE: La proyección de la llave pública se infiere de la
 *    variante del WIF de entrada; el sobre la transporta en su bandera.
 * 2. COMMITMENT DISCIPLINE: El hash de dirección se computa sobre los
 *    bytes ASCII de la dirección, no sobre su payload binario; ese hash
 *    es simultáneamente la sal scrypt y el verificador de frase.
 * 3. MASK THEN ENCRYPT: Cada mitad del escalar se enmascara por XOR con
 *    material derivado antes del bloque AES; la inversión descifra y
 *    desenmascara en el orden opuesto.
 * =================================================================
 */

use crate::aes_ecb::{decrypt_block_16, encrypt_block_16, xor_block_16};
use crate::artifacts::DecryptedKey;
use crate::errors::CipherError;
use crate::flags::{NON_EC_COMPRESSED_FLAG, NON_EC_ENVELOPE_PREFIX, NON_EC_UNCOMPRESSED_FLAG};
use crate::kdf::derive_passphrase_key64;
use qvault_core_codec::prelude::{
    check_encode, decode_wif, private_key_to_wif, public_key_to_address, Network, WifFormat,
};
use qvault_core_math::prelude::{checksum, derive_public_key, PrivateKey, PublicKeyForm};
use tracing::{debug, instrument};

/**
 * Cifra un WIF bajo una frase maestra (rama no-EC-multiplicada).
 *
 * La variante del WIF dicta la proyección de la llave pública y con ella
 * la dirección comprometida; la red del argumento gobierna el byte de
 * versión de esa dirección.
 */
#[instrument(level = "trace", skip_all)]
pub fn bip38_encrypt(
    wif_text: &str,
    passphrase: &str,
    network: Network,
) -> Result<String, CipherError> {
    // 1. ADQUISICIÓN DEL ESCALAR Y SU PROYECCIÓN
    let decoded_wif = decode_wif(wif_text)?;
    let (flag_byte, public_key_form) = match decoded_wif.format {
        WifFormat::Wif => (NON_EC_UNCOMPRESSED_FLAG, PublicKeyForm::Uncompressed),
        WifFormat::WifCompressed => (NON_EC_COMPRESSED_FLAG, PublicKeyForm::Compressed),
    };

    // 2. COMPROMISO DE DIRECCIÓN (sal y verificador)
    let public_key = derive_public_key(&decoded_wif.private_key, public_key_form)?;
    let address = public_key_to_address(&public_key, network);
    let address_hash = checksum(address.as_bytes());

    // 3. DERIVACIÓN DE MATERIAL (perfil pesado)
    let derived_key = derive_passphrase_key64(passphrase, &address_hash)?;
    let mut aes_key = [0u8; 32];
    aes_key.copy_from_slice(&derived_key[32..64]);

    // 4. ENMASCARADO Y CIFRADO POR MITADES
    let scalar_bytes = decoded_wif.private_key.to_bytes();
    let encrypted_half_1 = encrypt_block_16(
        &aes_key,
        &xor_block_16(&scalar_bytes[..16], &derived_key[..16]),
    );
    let encrypted_half_2 = encrypt_block_16(
        &aes_key,
        &xor_block_16(&scalar_bytes[16..32], &derived_key[16..32]),
    );

    // 5. SELLADO DEL SOBRE (39 bytes + checksum Base58Check)
    let mut envelope_payload = Vec::with_capacity(39);
    envelope_payload.extend_from_slice(&NON_EC_ENVELOPE_PREFIX);
    envelope_payload.push(flag_byte);
    envelope_payload.extend_from_slice(&address_hash);
    envelope_payload.extend_from_slice(&encrypted_half_1);
    envelope_payload.extend_from_slice(&encrypted_half_2);

    debug!("🔐 [VAULT]: Non-EC envelope sealed.");
    Ok(check_encode(&envelope_payload))
}

/**
 * Descifra un sobre no-EC (payload de 39 bytes, checksum ya retirado).
 *
 * # Errors:
 * `CipherError::InvalidFlag` si la bandera no es 0xC0/0xE0;
 * `CipherError::MathFault` si el escalar recuperado viola 0 < d < n;
 * `CipherError::IncorrectPassphrase` si el hash de dirección no verifica.
 */
#[instrument(level = "trace", skip_all)]
pub(crate) fn decrypt_non_ec(
    envelope_payload: &[u8],
    passphrase: &str,
    network: Network,
) -> Result<DecryptedKey, CipherError> {
    // 1. DISCIPLINA DE BANDERA
    let flag_byte = envelope_payload[2];
    let (wif_format, public_key_form) = match flag_byte {
        NON_EC_UNCOMPRESSED_FLAG => (WifFormat::Wif, PublicKeyForm::Uncompressed),
        NON_EC_COMPRESSED_FLAG => (WifFormat::WifCompressed, PublicKeyForm::Compressed),
        other => return Err(CipherError::InvalidFlag { got: other }),
    };
    let address_hash = &envelope_payload[3..7];

    // 2. DERIVACIÓN Y DESCIFRADO POR MITADES
    let derived_key = derive_passphrase_key64(passphrase, address_hash)?;
    let mut aes_key = [0u8; 32];
    aes_key.copy_from_slice(&derived_key[32..64]);

    let mut encrypted_half_1 = [0u8; 16];
    encrypted_half_1.copy_from_slice(&envelope_payload[7..23]);
    let mut encrypted_half_2 = [0u8; 16];
    encrypted_half_2.copy_from_slice(&envelope_payload[23..39]);

    let decrypted_half_1 = decrypt_block_16(&aes_key, &encrypted_half_1);
    let decrypted_half_2 = decrypt_block_16(&aes_key, &encrypted_half_2);

    // 3. DESENMASCARADO DEL ESCALAR (ancho fijo de 32 bytes)
    let mut scalar_bytes = [0u8; 32];
    scalar_bytes[..16].copy_from_slice(&xor_block_16(&decrypted_half_1, &derived_key[..16]));
    scalar_bytes[16..].copy_from_slice(&xor_block_16(&decrypted_half_2, &derived_key[16..32]));

    let private_key = PrivateKey::from_bytes(&scalar_bytes)?;

    // 4. VERIFICACIÓN DEL COMPROMISO DE DIRECCIÓN
    let public_key = derive_public_key(&private_key, public_key_form)?;
    let address = public_key_to_address(&public_key, network);
    if checksum(address.as_bytes()) != address_hash {
        return Err(CipherError::IncorrectPassphrase);
    }

    let wif = private_key_to_wif(&private_key, wif_format, network);
    debug!("🔓 [VAULT]: Non-EC envelope opened and commitment verified.");

    Ok(DecryptedKey {
        wif,
        private_key: hex::encode(scalar_bytes),
        wif_format,
        public_key: hex::encode(&public_key),
        public_key_form,
        seed: None,
        address,
        lot_sequence: None,
    })
}
