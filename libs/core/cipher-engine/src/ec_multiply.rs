// [libs/core/cipher-engine/src/ec_multiply.rs]
/*!
 * =================================================================
 * APARATO: EC-MULTIPLY VAULT ENGINE (V3.4 - TWO FACTOR SEALED)
 * CLASIFICACIÓN: CORE CIPHER (ESTRATO L1)
 * RESPONSABILIDAD: CÓDIGOS INTERMEDIOS, ACUÑADO, CONFIRMACIÓN Y
 *                  DESCIFRADO DE LA RAMA EC (SOBRE 0x0143)
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. TWO FACTOR SPLIT: El custodio de la frase aporta pass_factor (vía
 *    scrypt pesado sobre la sal de propietario); el acuñador aporta
 *    factor_b (doble SHA-256 de una semilla fresca). La llave final es
 *    el producto modular de ambos escalares y ninguna parte conoce la
 *    otra mitad.
 * 2. ENTROPY DISCIPLINE: La entropía de propietario mide 8 bytes; con
 *    lot/sequence se compone de 4 bytes de sal y la palabra Big-Endian
 *    lot*4096+sequence.
 * 3. CONFIRMATION CHANNEL: El punto comprimido de factor_b viaja
 *    cifrado en el código de confirmación; el custodio lo multiplica
 *    por su pass_factor para reconstruir la dirección sin conocer la
 *    llave.
 * =================================================================
 */

use crate::aes_ecb::{decrypt_block_16, encrypt_block_16, xor_block_16};
use crate::artifacts::{ConfirmedCode, DecryptedKey, MintedEncryptedWif};
use crate::errors::CipherError;
use crate::flags::{
    is_ec_flag, is_illegal_flag, signals_compression, signals_lot_sequence,
    CONFIRMATION_CODE_PREFIX, EC_ENVELOPE_PREFIX, INTERMEDIATE_MAGIC_LOT_SEQUENCE,
    INTERMEDIATE_MAGIC_NO_LOT_SEQUENCE, LOT_SEQUENCE_COMPRESSED_FLAG,
    LOT_SEQUENCE_UNCOMPRESSED_FLAG, NO_LOT_SEQUENCE_COMPRESSED_FLAG,
    NO_LOT_SEQUENCE_UNCOMPRESSED_FLAG,
};
use crate::kdf::{derive_passphrase_key32, derive_point_key64};
use crate::random::random_bytes;
use qvault_core_codec::prelude::{
    check_decode, check_encode, private_key_to_wif, public_key_to_address, Network, WifFormat,
};
use qvault_core_math::prelude::{
    checksum, compress_public_key, derive_public_key, double_sha256, multiply_public_key,
    PrivateKey, PublicKeyForm,
};
use serde::Serialize;
use tracing::{debug, instrument};

/// Ancho del payload de un código intermedio (magia ‖ entropía ‖ punto).
const INTERMEDIATE_PAYLOAD_SIZE: usize = 49;
/// Ancho del payload de un código de confirmación.
const CONFIRMATION_PAYLOAD_SIZE: usize = 51;
/// Ancho de la semilla fresca consumida por el acuñado.
const SEED_BYTE_SIZE: usize = 24;
/// Ancho de la entropía de propietario.
const OWNER_ENTROPY_SIZE: usize = 8;

/// Par lot/sequence embebido en la entropía de propietario.
///
/// El constructor valida ambos rangos; un par a medias no es
/// representable en la API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LotSequence {
    lot: u32,
    sequence: u32,
}

impl LotSequence {
    /// Cota inferior del número de lote.
    pub const MIN_LOT: u32 = 100_000;
    /// Cota superior del número de lote.
    pub const MAX_LOT: u32 = 999_999;
    /// Cota superior del número de secuencia.
    pub const MAX_SEQUENCE: u32 = 4095;

    /// Construye el par validando rangos.
    ///
    /// # Errors:
    /// `CipherError::InvalidParameter` si lot ∉ [100000, 999999] o
    /// sequence ∉ [0, 4095].
    pub fn new(lot: u32, sequence: u32) -> Result<Self, CipherError> {
        if !(Self::MIN_LOT..=Self::MAX_LOT).contains(&lot) {
            return Err(CipherError::InvalidParameter(format!(
                "lot fuera de rango [100000, 999999]: {lot}"
            )));
        }
        if sequence > Self::MAX_SEQUENCE {
            return Err(CipherError::InvalidParameter(format!(
                "sequence fuera de rango [0, 4095]: {sequence}"
            )));
        }
        Ok(Self { lot, sequence })
    }

    /// Número de lote.
    #[must_use]
    pub fn lot(&self) -> u32 {
        self.lot
    }

    /// Número de secuencia.
    #[must_use]
    pub fn sequence(&self) -> u32 {
        self.sequence
    }

    /// Palabra de entropía Big-Endian: lot * 4096 + sequence.
    #[must_use]
    pub fn entropy_word(&self) -> u32 {
        self.lot * 4096 + self.sequence
    }

    /// Reconstruye el par desde la palabra de entropía transportada.
    #[must_use]
    pub fn from_entropy_word(entropy_word: u32) -> Self {
        Self {
            lot: entropy_word / 4096,
            sequence: entropy_word % 4096,
        }
    }
}

/// Recupera el par lot/sequence de la entropía cuando la bandera lo señala.
fn lot_sequence_from_entropy(flag_byte: u8, owner_entropy: &[u8]) -> Option<LotSequence> {
    if !signals_lot_sequence(flag_byte) {
        return None;
    }
    let mut word_bytes = [0u8; 4];
    word_bytes.copy_from_slice(&owner_entropy[4..8]);
    Some(LotSequence::from_entropy_word(u32::from_be_bytes(word_bytes)))
}

/// Escalera de derivación del factor de frase compartida por la
/// confirmación y el descifrado EC.
fn derive_pass_factor(
    passphrase: &str,
    has_lot_sequence: bool,
    owner_entropy: &[u8],
) -> Result<[u8; 32], CipherError> {
    if has_lot_sequence {
        let pre_factor = derive_passphrase_key32(passphrase, &owner_entropy[..4])?;
        let mut ladder_material = Vec::with_capacity(32 + OWNER_ENTROPY_SIZE);
        ladder_material.extend_from_slice(&pre_factor);
        ladder_material.extend_from_slice(owner_entropy);
        Ok(double_sha256(&ladder_material))
    } else {
        derive_passphrase_key32(passphrase, owner_entropy)
    }
}

/**
 * Genera un código intermedio: el compromiso público de una frase maestra.
 *
 * Sin lot/sequence la sal de propietario mide 8 bytes y es la entropía
 * completa; con lot/sequence la sal mide 4 bytes (de una sal mayor se
 * consumen los 4 primeros) y la entropía adjunta la palabra
 * lot*4096+sequence en Big-Endian.
 *
 * # Errors:
 * `CipherError::InvalidParameter` ante sal de longitud ∉ {4, 8} o sal
 * de 4 bytes sin par lot/sequence.
 */
#[instrument(level = "trace", skip_all)]
pub fn intermediate_code(
    passphrase: &str,
    lot_sequence: Option<LotSequence>,
    owner_salt: Option<&[u8]>,
) -> Result<String, CipherError> {
    // 1. ADQUISICIÓN Y DISCIPLINA DE LA SAL
    let salt_material: Vec<u8> = match owner_salt {
        Some(supplied_salt) => supplied_salt.to_vec(),
        None => {
            if lot_sequence.is_some() {
                random_bytes::<4>().to_vec()
            } else {
                random_bytes::<8>().to_vec()
            }
        }
    };
    if salt_material.len() != 4 && salt_material.len() != OWNER_ENTROPY_SIZE {
        return Err(CipherError::InvalidParameter(format!(
            "sal de propietario de longitud ilegal: {} bytes",
            salt_material.len()
        )));
    }
    if salt_material.len() == 4 && lot_sequence.is_none() {
        return Err(CipherError::InvalidParameter(
            "sal de 4 bytes sin par lot/sequence".into(),
        ));
    }

    // 2. ESCALERA DE DERIVACIÓN POR RAMA
    let (magic_bytes, owner_entropy, pass_factor) = match lot_sequence {
        Some(pair) => {
            let pre_factor = derive_passphrase_key32(passphrase, &salt_material[..4])?;

            let mut owner_entropy = [0u8; OWNER_ENTROPY_SIZE];
            owner_entropy[..4].copy_from_slice(&salt_material[..4]);
            owner_entropy[4..].copy_from_slice(&pair.entropy_word().to_be_bytes());

            let mut ladder_material = Vec::with_capacity(32 + OWNER_ENTROPY_SIZE);
            ladder_material.extend_from_slice(&pre_factor);
            ladder_material.extend_from_slice(&owner_entropy);

            (
                INTERMEDIATE_MAGIC_LOT_SEQUENCE,
                owner_entropy,
                double_sha256(&ladder_material),
            )
        }
        None => {
            let pass_factor = derive_passphrase_key32(passphrase, &salt_material)?;
            let mut owner_entropy = [0u8; OWNER_ENTROPY_SIZE];
            owner_entropy.copy_from_slice(&salt_material);
            (
                INTERMEDIATE_MAGIC_NO_LOT_SEQUENCE,
                owner_entropy,
                pass_factor,
            )
        }
    };

    // 3. PROYECCIÓN DEL FACTOR DE FRASE
    let pass_factor_key = PrivateKey::from_bytes(&pass_factor)?;
    let pass_point = derive_public_key(&pass_factor_key, PublicKeyForm::Compressed)?;

    let mut code_payload = Vec::with_capacity(INTERMEDIATE_PAYLOAD_SIZE);
    code_payload.extend_from_slice(&magic_bytes);
    code_payload.extend_from_slice(&owner_entropy);
    code_payload.extend_from_slice(&pass_point);

    debug!("🧬 [VAULT]: Intermediate code sealed.");
    Ok(check_encode(&code_payload))
}

/**
 * Acuña un nuevo WIF cifrado desde un código intermedio, sin conocer la
 * frase maestra.
 *
 * Consume una semilla fresca de 24 bytes (del llamador o del CSPRNG) y
 * emite el sobre 0x0143 junto al código de confirmación para el
 * custodio de la frase.
 */
#[instrument(level = "trace", skip_all)]
pub fn create_new_encrypted_wif(
    intermediate_code_text: &str,
    public_key_form: PublicKeyForm,
    seed: Option<&[u8]>,
    network: Network,
) -> Result<MintedEncryptedWif, CipherError> {
    // 1. ADQUISICIÓN DE LA SEMILLA
    let seed_b: [u8; SEED_BYTE_SIZE] = match seed {
        Some(supplied_seed) => {
            supplied_seed
                .try_into()
                .map_err(|_| CipherError::InvalidLength {
                    context: "seed",
                    expected: SEED_BYTE_SIZE,
                    got: supplied_seed.len(),
                })?
        }
        None => random_bytes::<SEED_BYTE_SIZE>(),
    };

    // 2. APERTURA DEL CÓDIGO INTERMEDIO
    let intermediate_payload = check_decode(intermediate_code_text)?;
    if intermediate_payload.len() != INTERMEDIATE_PAYLOAD_SIZE {
        return Err(CipherError::InvalidLength {
            context: "intermediate code",
            expected: INTERMEDIATE_PAYLOAD_SIZE,
            got: intermediate_payload.len(),
        });
    }
    let magic_bytes = &intermediate_payload[..8];
    let owner_entropy = &intermediate_payload[8..16];
    let pass_point = &intermediate_payload[16..49];

    let flag_byte = if magic_bytes == INTERMEDIATE_MAGIC_LOT_SEQUENCE {
        match public_key_form {
            PublicKeyForm::Uncompressed => LOT_SEQUENCE_UNCOMPRESSED_FLAG,
            PublicKeyForm::Compressed => LOT_SEQUENCE_COMPRESSED_FLAG,
        }
    } else if magic_bytes == INTERMEDIATE_MAGIC_NO_LOT_SEQUENCE {
        match public_key_form {
            PublicKeyForm::Uncompressed => NO_LOT_SEQUENCE_UNCOMPRESSED_FLAG,
            PublicKeyForm::Compressed => NO_LOT_SEQUENCE_COMPRESSED_FLAG,
        }
    } else {
        return Err(CipherError::InvalidMagic);
    };

    // 3. FACTOR DEL ACUÑADOR Y LLAVE PÚBLICA DE DOS FACTORES
    let factor_b = double_sha256(&seed_b);
    let factor_b_key = PrivateKey::from_bytes(&factor_b)?;
    let public_key = multiply_public_key(pass_point, &factor_b, public_key_form)?;

    let address = public_key_to_address(&public_key, network);
    let address_hash = checksum(address.as_bytes());

    // 4. DERIVACIÓN LIGERA Y CIFRADO ENCADENADO DE LA SEMILLA
    let mut point_salt = Vec::with_capacity(4 + OWNER_ENTROPY_SIZE);
    point_salt.extend_from_slice(&address_hash);
    point_salt.extend_from_slice(owner_entropy);
    let derived_key = derive_point_key64(pass_point, &point_salt)?;
    let mut aes_key = [0u8; 32];
    aes_key.copy_from_slice(&derived_key[32..64]);

    let encrypted_half_1 = encrypt_block_16(
        &aes_key,
        &xor_block_16(&seed_b[..16], &derived_key[..16]),
    );

    let mut chained_block = [0u8; 16];
    chained_block[..8].copy_from_slice(&encrypted_half_1[8..16]);
    chained_block[8..].copy_from_slice(&seed_b[16..24]);
    let encrypted_half_2 = encrypt_block_16(
        &aes_key,
        &xor_block_16(&chained_block, &derived_key[16..32]),
    );

    let mut envelope_payload = Vec::with_capacity(39);
    envelope_payload.extend_from_slice(&EC_ENVELOPE_PREFIX);
    envelope_payload.push(flag_byte);
    envelope_payload.extend_from_slice(&address_hash);
    envelope_payload.extend_from_slice(owner_entropy);
    envelope_payload.extend_from_slice(&encrypted_half_1[..8]);
    envelope_payload.extend_from_slice(&encrypted_half_2);
    let encrypted_wif = check_encode(&envelope_payload);

    // 5. CANAL DE CONFIRMACIÓN: PUNTO B CIFRADO
    let point_b = derive_public_key(&factor_b_key, PublicKeyForm::Compressed)?;
    let point_b_prefix = point_b[0] ^ (derived_key[63] & 1);
    let point_b_half_1 = encrypt_block_16(
        &aes_key,
        &xor_block_16(&point_b[1..17], &derived_key[..16]),
    );
    let point_b_half_2 = encrypt_block_16(
        &aes_key,
        &xor_block_16(&point_b[17..33], &derived_key[16..32]),
    );

    let mut confirmation_payload = Vec::with_capacity(CONFIRMATION_PAYLOAD_SIZE);
    confirmation_payload.extend_from_slice(&CONFIRMATION_CODE_PREFIX);
    confirmation_payload.push(flag_byte);
    confirmation_payload.extend_from_slice(&address_hash);
    confirmation_payload.extend_from_slice(owner_entropy);
    confirmation_payload.push(point_b_prefix);
    confirmation_payload.extend_from_slice(&point_b_half_1);
    confirmation_payload.extend_from_slice(&point_b_half_2);
    let confirmation_code = check_encode(&confirmation_payload);

    debug!("🪙 [VAULT]: New EC envelope minted with confirmation channel.");
    Ok(MintedEncryptedWif {
        encrypted_wif,
        confirmation_code,
        public_key: hex::encode(&public_key),
        seed: hex::encode(seed_b),
        public_key_form,
        address,
    })
}

/**
 * Verifica un código de confirmación contra una frase maestra.
 *
 * Reconstruye el punto B descifrando el canal de confirmación, lo
 * multiplica por el factor de frase y compara el hash de la dirección
 * resultante con el comprometido en el código.
 *
 * # Errors:
 * `CipherError::IncorrectPassphrase` si el material descifrado no
 * reconstruye la dirección comprometida.
 */
#[instrument(level = "trace", skip_all)]
pub fn confirm_code(
    passphrase: &str,
    confirmation_code_text: &str,
    network: Network,
) -> Result<ConfirmedCode, CipherError> {
    // 1. APERTURA Y DISCIPLINA DEL CÓDIGO
    let code_payload = check_decode(confirmation_code_text)?;
    if code_payload.len() != CONFIRMATION_PAYLOAD_SIZE {
        return Err(CipherError::InvalidLength {
            context: "confirmation code",
            expected: CONFIRMATION_PAYLOAD_SIZE,
            got: code_payload.len(),
        });
    }
    if code_payload[..5] != CONFIRMATION_CODE_PREFIX {
        return Err(CipherError::InvalidPrefix);
    }
    let flag_byte = code_payload[5];
    if is_illegal_flag(flag_byte) || !is_ec_flag(flag_byte) {
        return Err(CipherError::InvalidFlag { got: flag_byte });
    }

    let address_hash = &code_payload[6..10];
    let owner_entropy = &code_payload[10..18];
    let encrypted_point_b = &code_payload[18..51];

    // 2. RECONSTRUCCIÓN DEL FACTOR Y PUNTO DE FRASE
    let pass_factor =
        derive_pass_factor(passphrase, signals_lot_sequence(flag_byte), owner_entropy)?;
    let pass_factor_key = PrivateKey::from_bytes(&pass_factor)?;
    let pass_point = derive_public_key(&pass_factor_key, PublicKeyForm::Compressed)?;

    let mut point_salt = Vec::with_capacity(4 + OWNER_ENTROPY_SIZE);
    point_salt.extend_from_slice(address_hash);
    point_salt.extend_from_slice(owner_entropy);
    let derived_key = derive_point_key64(&pass_point, &point_salt)?;
    let mut aes_key = [0u8; 32];
    aes_key.copy_from_slice(&derived_key[32..64]);

    // 3. DESCIFRADO DEL PUNTO B
    let mut first_ciphertext = [0u8; 16];
    first_ciphertext.copy_from_slice(&encrypted_point_b[1..17]);
    let mut second_ciphertext = [0u8; 16];
    second_ciphertext.copy_from_slice(&encrypted_point_b[17..33]);

    let point_b_half_1 = xor_block_16(
        &decrypt_block_16(&aes_key, &first_ciphertext),
        &derived_key[..16],
    );
    let point_b_half_2 = xor_block_16(
        &decrypt_block_16(&aes_key, &second_ciphertext),
        &derived_key[16..32],
    );
    let point_b_prefix = encrypted_point_b[0] ^ (derived_key[63] & 1);

    let mut point_b = [0u8; 33];
    point_b[0] = point_b_prefix;
    point_b[1..17].copy_from_slice(&point_b_half_1);
    point_b[17..33].copy_from_slice(&point_b_half_2);

    // 4. RECONSTRUCCIÓN DE LA LLAVE PÚBLICA Y VERIFICACIÓN
    // Con frase incorrecta el punto descifrado es material arbitrario:
    // cualquier colapso geométrico equivale a frase incorrecta.
    let uncompressed_public_key =
        multiply_public_key(&point_b, &pass_factor, PublicKeyForm::Uncompressed)
            .map_err(|_| CipherError::IncorrectPassphrase)?;

    let (public_key, public_key_form) = if signals_compression(flag_byte) {
        let compressed = compress_public_key(&uncompressed_public_key)
            .map_err(|_| CipherError::IncorrectPassphrase)?;
        (compressed.to_vec(), PublicKeyForm::Compressed)
    } else {
        (uncompressed_public_key, PublicKeyForm::Uncompressed)
    };

    let address = public_key_to_address(&public_key, network);
    if checksum(address.as_bytes()) != address_hash {
        return Err(CipherError::IncorrectPassphrase);
    }

    debug!("✅ [VAULT]: Confirmation code verified against passphrase.");
    Ok(ConfirmedCode {
        public_key: hex::encode(&public_key),
        public_key_form,
        address,
        lot_sequence: lot_sequence_from_entropy(flag_byte, owner_entropy),
    })
}

/**
 * Descifra un sobre EC (payload de 39 bytes, checksum ya retirado).
 *
 * Recupera la semilla por inversión del cifrado encadenado, reconstruye
 * factor_b y compone la llave privada como producto modular de los dos
 * factores.
 */
#[instrument(level = "trace", skip_all)]
pub(crate) fn decrypt_ec(
    envelope_payload: &[u8],
    passphrase: &str,
    network: Network,
) -> Result<DecryptedKey, CipherError> {
    // 1. PARTICIÓN DEL SOBRE
    let flag_byte = envelope_payload[2];
    if !is_ec_flag(flag_byte) {
        return Err(CipherError::InvalidFlag { got: flag_byte });
    }
    let address_hash = &envelope_payload[3..7];
    let owner_entropy = &envelope_payload[7..15];
    let encrypted_half_1_half_1 = &envelope_payload[15..23];
    let mut second_ciphertext = [0u8; 16];
    second_ciphertext.copy_from_slice(&envelope_payload[23..39]);

    // 2. FACTOR DE FRASE Y DERIVACIÓN LIGERA
    let pass_factor =
        derive_pass_factor(passphrase, signals_lot_sequence(flag_byte), owner_entropy)?;
    let pass_factor_key = PrivateKey::from_bytes(&pass_factor)?;
    let pass_point = derive_public_key(&pass_factor_key, PublicKeyForm::Compressed)?;

    let mut point_salt = Vec::with_capacity(4 + OWNER_ENTROPY_SIZE);
    point_salt.extend_from_slice(address_hash);
    point_salt.extend_from_slice(owner_entropy);
    let derived_key = derive_point_key64(&pass_point, &point_salt)?;
    let mut aes_key = [0u8; 32];
    aes_key.copy_from_slice(&derived_key[32..64]);

    // 3. INVERSIÓN DEL CIFRADO ENCADENADO DE LA SEMILLA
    let second_plaintext = xor_block_16(
        &decrypt_block_16(&aes_key, &second_ciphertext),
        &derived_key[16..32],
    );

    let mut first_ciphertext = [0u8; 16];
    first_ciphertext[..8].copy_from_slice(encrypted_half_1_half_1);
    first_ciphertext[8..].copy_from_slice(&second_plaintext[..8]);
    let first_plaintext = xor_block_16(
        &decrypt_block_16(&aes_key, &first_ciphertext),
        &derived_key[..16],
    );

    let mut seed_b = [0u8; SEED_BYTE_SIZE];
    seed_b[..16].copy_from_slice(&first_plaintext);
    seed_b[16..].copy_from_slice(&second_plaintext[8..16]);

    // 4. COMPOSICIÓN DE LA LLAVE DE DOS FACTORES
    let factor_b = double_sha256(&seed_b);
    let factor_b_key = PrivateKey::from_bytes(&factor_b)?;
    let private_key = pass_factor_key.multiply_modulo_order(&factor_b_key)?;

    let (wif_format, public_key_form) = if signals_compression(flag_byte) {
        (WifFormat::WifCompressed, PublicKeyForm::Compressed)
    } else {
        (WifFormat::Wif, PublicKeyForm::Uncompressed)
    };

    // 5. VERIFICACIÓN DEL COMPROMISO DE DIRECCIÓN
    let public_key = derive_public_key(&private_key, public_key_form)?;
    let address = public_key_to_address(&public_key, network);
    if checksum(address.as_bytes()) != address_hash {
        return Err(CipherError::IncorrectPassphrase);
    }

    let wif = private_key_to_wif(&private_key, wif_format, network);
    debug!("🔓 [VAULT]: EC envelope opened and two-factor key recomposed.");

    Ok(DecryptedKey {
        wif,
        private_key: hex::encode(private_key.to_bytes()),
        wif_format,
        public_key: hex::encode(&public_key),
        public_key_form,
        seed: Some(hex::encode(seed_b)),
        address,
        lot_sequence: lot_sequence_from_entropy(flag_byte, owner_entropy),
    })
}
