// [libs/core/cipher-engine/src/artifacts.rs]
/*!
 * =================================================================
 * APARATO: RESULT ARTIFACTS (V3.0 - SERDE SEALED)
 * CLASIFICACIÓN: CORE CIPHER (ESTRATO L1)
 * RESPONSABILIDAD: ESTRUCTURAS DE RESULTADO DE LAS OPERACIONES DEL VAULT
 * =================================================================
 */

use crate::ec_multiply::LotSequence;
use qvault_core_codec::wif::WifFormat;
use qvault_core_math::public_key::PublicKeyForm;
use serde::Serialize;

/// Resultado del acuñado de un nuevo WIF cifrado desde un código intermedio.
#[derive(Debug, Clone, Serialize)]
pub struct MintedEncryptedWif {
    /// Sobre cifrado Base58Check (familia 0x0143).
    pub encrypted_wif: String,
    /// Código de confirmación Base58Check para el custodio de la frase.
    pub confirmation_code: String,
    /// Llave pública derivada, en hexadecimal.
    pub public_key: String,
    /// Semilla de 24 bytes consumida, en hexadecimal.
    pub seed: String,
    /// Proyección elegida de la llave pública.
    pub public_key_form: PublicKeyForm,
    /// Dirección P2PKH comprometida por el sobre.
    pub address: String,
}

/// Resultado detallado del descifrado de un sobre (ambas ramas).
#[derive(Debug, Clone, Serialize)]
pub struct DecryptedKey {
    /// WIF recuperado, en la variante dictada por la bandera del sobre.
    pub wif: String,
    /// Escalar secreto recuperado, en hexadecimal.
    pub private_key: String,
    /// Variante del envoltorio WIF emitido.
    pub wif_format: WifFormat,
    /// Llave pública re-derivada, en hexadecimal.
    pub public_key: String,
    /// Proyección de la llave pública re-derivada.
    pub public_key_form: PublicKeyForm,
    /// Semilla recuperada (sólo en la rama EC), en hexadecimal.
    pub seed: Option<String>,
    /// Dirección P2PKH verificada contra el hash comprometido.
    pub address: String,
    /// Par lot/sequence recuperado de la entropía (sólo si la bandera lo señala).
    pub lot_sequence: Option<LotSequence>,
}

/// Resultado de la verificación de un código de confirmación.
#[derive(Debug, Clone, Serialize)]
pub struct ConfirmedCode {
    /// Llave pública reconstruida, en hexadecimal.
    pub public_key: String,
    /// Proyección de la llave pública reconstruida.
    pub public_key_form: PublicKeyForm,
    /// Dirección P2PKH confirmada.
    pub address: String,
    /// Par lot/sequence recuperado de la entropía (si la bandera lo señala).
    pub lot_sequence: Option<LotSequence>,
}
