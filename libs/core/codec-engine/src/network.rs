// [libs/core/codec-engine/src/network.rs]
/*!
 * =================================================================
 * APARATO: NETWORK STRATA REGISTRY (V3.0 - DUAL NET)
 * CLASIFICACIÓN: CORE CODEC (ESTRATO L1)
 * RESPONSABILIDAD: BYTES DE VERSIÓN POR RED (WIF Y P2PKH)
 * =================================================================
 */

use crate::errors::CodecError;
use serde::Serialize;

/// Byte de versión WIF para la red principal.
const MAINNET_WIF_VERSION_BYTE: u8 = 0x80;
/// Byte de versión WIF para la red de pruebas.
const TESTNET_WIF_VERSION_BYTE: u8 = 0xef;
/// Byte de versión P2PKH para la red principal (direcciones 'Q').
const MAINNET_ADDRESS_VERSION_BYTE: u8 = 0x3a;
/// Byte de versión P2PKH para la red de pruebas.
const TESTNET_ADDRESS_VERSION_BYTE: u8 = 0x78;

/// Red objetivo de la cadena.
///
/// Cada red fija el byte de versión del WIF y el de la dirección P2PKH;
/// ambos participan en los sobres y en el hash de dirección comprometido.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Network {
    /// Red principal.
    Mainnet,
    /// Red de pruebas.
    Testnet,
}

impl Network {
    /// Byte de versión del envoltorio WIF.
    #[inline(always)]
    #[must_use]
    pub fn wif_version_byte(&self) -> u8 {
        match self {
            Network::Mainnet => MAINNET_WIF_VERSION_BYTE,
            Network::Testnet => TESTNET_WIF_VERSION_BYTE,
        }
    }

    /// Byte de versión de la dirección P2PKH.
    #[inline(always)]
    #[must_use]
    pub fn address_version_byte(&self) -> u8 {
        match self {
            Network::Mainnet => MAINNET_ADDRESS_VERSION_BYTE,
            Network::Testnet => TESTNET_ADDRESS_VERSION_BYTE,
        }
    }

    /// Resuelve la red desde el byte de versión de un WIF.
    ///
    /// # Errors:
    /// `CodecError::UnknownVersionByte` si el byte no pertenece a ninguna red.
    pub fn from_wif_version_byte(version_byte: u8) -> Result<Self, CodecError> {
        match version_byte {
            MAINNET_WIF_VERSION_BYTE => Ok(Network::Mainnet),
            TESTNET_WIF_VERSION_BYTE => Ok(Network::Testnet),
            other => Err(CodecError::UnknownVersionByte { got: other }),
        }
    }

    /// Etiqueta nominal de la red.
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            Network::Mainnet => "mainnet",
            Network::Testnet => "testnet",
        }
    }
}
