// [libs/core/cipher-engine/src/errors.rs]
// =================================================================
// APARATO: CIPHER ERRORS
// RESPONSABILIDAD: CATÁLOGO DE FALLOS DEL MOTOR DE CIFRADO DE LLAVES
// ESTADO: ELITE COMPLIANCE (FULL RUSTDOC)
// =================================================================

use qvault_core_codec::errors::CodecError;
use qvault_core_math::errors::MathError;
use thiserror::Error;

/// Define los fallos posibles del motor de cifrado por frase maestra.
///
/// La taxonomía separa el material malformado (codificación, longitud,
/// prefijo, bandera, magia, parámetros) de la única condición que implica
/// entradas criptográficas bien formadas: la frase maestra incorrecta.
#[derive(Error, Debug)]
pub enum CipherError {
    /// Fallo de codificación Base58/Base58Check o de formato WIF.
    #[error("CODEC_STRATA_FAULT: {0}")]
    CodecFault(#[from] CodecError),

    /// Fallo aritmético o geométrico del estrato matemático
    /// (incluye escalares fuera del intervalo (0, n)).
    #[error("MATH_STRATA_FAULT: {0}")]
    MathFault(#[from] MathError),

    /// El sobre no tiene el ancho canónico de su familia.
    #[error("LENGTH_FAULT ({context}): longitud inválida (esperado: {expected}, recibido: {got})")]
    InvalidLength {
        /// Familia de sobre auditada.
        context: &'static str,
        /// Ancho canónico del payload.
        expected: usize,
        /// Ancho efectivamente recibido.
        got: usize,
    },

    /// Los bytes fijos iniciales no corresponden a ningún sobre conocido.
    #[error("PREFIX_FAULT: prefijo de sobre desconocido")]
    InvalidPrefix,

    /// El byte de bandera pertenece al conjunto ilegal o no corresponde
    /// a la rama del sobre.
    #[error("FLAG_FAULT: byte de bandera ilegal (0x{got:02x})")]
    InvalidFlag {
        /// Bandera efectivamente recibida.
        got: u8,
    },

    /// La magia del código intermedio no es ninguna de las dos conocidas.
    #[error("MAGIC_FAULT: magia de código intermedio desconocida")]
    InvalidMagic,

    /// Parámetro de operación fuera de contrato (lot/sequence fuera de
    /// rango, sal de longitud ilegal, semilla de ancho incorrecto).
    #[error("PARAMETER_FAULT: {0}")]
    InvalidParameter(String),

    /// Fallo interno del derivador de llaves (parámetros de coste o
    /// ancho de salida rechazados por el motor scrypt).
    #[error("DERIVATION_FAULT: {0}")]
    DerivationFault(String),

    /// La verificación del hash de dirección falló: la frase maestra no
    /// corresponde al material cifrado.
    #[error("INCORRECT_PASSPHRASE: la frase maestra no descifra este material")]
    IncorrectPassphrase,
}
