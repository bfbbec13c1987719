// [libs/core/codec-engine/src/lib.rs]
#![deny(missing_docs)]

/*!
 * =================================================================
 * APARATO: CORE CODEC MASTER HUB (V3.0 - VAULT SYNC)
 * CLASIFICACIÓN: CORE CODEC (ESTRATO L1)
 * RESPONSABILIDAD: ORQUESTACIÓN DE CODIFICADORES DE FORMATO
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. FORMAT STRATA: Publica los codificadores Base58/Base58Check, el
 *    envoltorio WIF y el generador de direcciones P2PKH.
 * 2. NETWORK SOVEREIGNTY: Los bytes de versión viven únicamente en el
 *    registro de red; ningún estrato superior los re-declara.
 * =================================================================
 */

/// Generación de direcciones P2PKH Base58Check.
pub mod address;
/// Codificación Base58 cruda y con checksum.
pub mod base58;
/// Catálogo de fallos de codificación de formatos.
pub mod errors;
/// Registro de bytes de versión por red.
pub mod network;
/// Envoltorio WIF con versión de red y marcador comprimido.
pub mod wif;

/**
 * PRELUDIO DE CODIFICACIÓN SOBERANO
 *
 * Única autoridad de importación autorizada para el estrato de cifrado.
 */
pub mod prelude {
    pub use crate::address::public_key_to_address;
    pub use crate::base58::{check_decode, check_encode, decode, encode};
    pub use crate::errors::CodecError;
    pub use crate::network::Network;
    pub use crate::wif::{
        decode_wif, get_wif_checksum, get_wif_format, get_wif_network, private_key_to_wif,
        wif_to_private_key, DecodedWif, WifFormat,
    };
}
