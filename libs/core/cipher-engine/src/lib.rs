// [libs/core/cipher-engine/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: CIPHER MASTER HUB (V3.0 - VAULT SYNC)
 * CLASIFICACIÓN: CORE CIPHER (ESTRATO L1)
 * RESPONSABILIDAD: ORQUESTACIÓN DEL MOTOR DE CIFRADO POR FRASE MAESTRA
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. DUAL BRANCH: Publica la rama no-EC-multiplicada (cifrado directo
 *    de un WIF) y la rama EC-multiplicada (códigos intermedios, acuñado
 *    delegado y canal de confirmación).
 * 2. PURE SURFACE: Toda operación es función pura de sus argumentos y,
 *    donde aplica, de la fuente de entropía explícita; no existe estado
 *    compartido entre llamadas.
 * 3. NOMINAL PRELUDE: Re-exporta la superficie completa del vault,
 *    incluidos los codificadores y primitivas de los estratos inferiores.
 * =================================================================
 */

/// Primitivas AES-256 sobre bloques independientes de 16 bytes.
pub mod aes_ecb;
/// Estructuras de resultado de las operaciones del vault.
pub mod artifacts;
/// Enrutado de sobres cifrados por prefijo.
pub mod dispatcher;
/// Rama EC-multiplicada: intermedios, acuñado, confirmación y descifrado.
pub mod ec_multiply;
/// Catálogo de fallos del motor de cifrado.
pub mod errors;
/// Prefijos de sobre, magias y clasificación de banderas.
pub mod flags;
/// Normalización NFC y perfiles scrypt del protocolo.
pub mod kdf;
/// Rama no-EC-multiplicada: cifrado y descifrado directo de un WIF.
pub mod non_ec;
/// Fuente de entropía por omisión (CSPRNG del sistema).
pub mod random;

/**
 * PRELUDIO SOBERANO DEL VAULT
 *
 * Superficie pública completa: las cinco operaciones del protocolo más
 * los codificadores y primitivas de identidad de los estratos L1.
 */
pub mod prelude {
    // Operaciones del protocolo
    pub use crate::dispatcher::bip38_decrypt;
    pub use crate::ec_multiply::{
        confirm_code, create_new_encrypted_wif, intermediate_code, LotSequence,
    };
    pub use crate::non_ec::bip38_encrypt;

    // Artefactos y fallos
    pub use crate::artifacts::{ConfirmedCode, DecryptedKey, MintedEncryptedWif};
    pub use crate::errors::CipherError;

    // Estrato de codificación
    pub use qvault_core_codec::prelude::{
        decode_wif, get_wif_checksum, get_wif_format, get_wif_network, private_key_to_wif,
        public_key_to_address, wif_to_private_key, DecodedWif, Network, WifFormat,
    };

    // Estrato matemático
    pub use qvault_core_math::prelude::{
        compress_public_key, derive_public_key, uncompress_public_key, PrivateKey, PublicKeyForm,
    };
}
