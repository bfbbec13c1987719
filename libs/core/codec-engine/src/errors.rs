// [libs/core/codec-engine/src/errors.rs]
// =================================================================
// APARATO: CODEC ERRORS
// RESPONSABILIDAD: CATÁLOGO DE FALLOS DE CODIFICACIÓN DE FORMATOS
// ESTADO: ELITE COMPLIANCE (FULL RUSTDOC)
// =================================================================

use qvault_core_math::errors::MathError;
use thiserror::Error;

/// Define los fallos posibles de los codificadores de formato.
///
/// Cubre el alfabeto Base58, la disciplina de checksum de los sobres,
/// los bytes de versión de red y los anchos canónicos del WIF.
#[derive(Error, Debug)]
pub enum CodecError {
    /// El texto no pertenece al alfabeto Base58 o su checksum no verifica.
    #[error("BASE58_DECODE_FAULT: {0}")]
    Base58Fault(#[from] bs58::decode::Error),

    /// El checksum truncado del sobre no coincide con el material.
    #[error("CHECKSUM_MISMATCH: el checksum del sobre no verifica")]
    ChecksumMismatch,

    /// El primer byte no corresponde a ninguna red conocida.
    #[error("VERSION_BYTE_FAULT: byte de versión desconocido (0x{got:02x})")]
    UnknownVersionByte {
        /// Byte de versión recibido.
        got: u8,
    },

    /// El material interno del WIF no mide 32 ni 33 bytes.
    #[error("WIF_LENGTH_FAULT: longitud interna inválida ({got} bytes)")]
    InvalidWifLength {
        /// Longitud interna efectivamente recibida.
        got: usize,
    },

    /// El sufijo del WIF de 33 bytes no es el marcador comprimido 0x01.
    #[error("WIF_SUFFIX_FAULT: sufijo de compresión ilegal (0x{got:02x})")]
    InvalidWifSuffix {
        /// Sufijo efectivamente recibido.
        got: u8,
    },

    /// Fallo aritmético del estrato matemático subyacente.
    #[error("MATH_STRATA_FAULT: {0}")]
    MathFault(#[from] MathError),
}
