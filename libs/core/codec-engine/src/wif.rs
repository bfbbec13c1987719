// [libs/core/codec-engine/src/wif.rs]
/*!
 * =================================================================
 * APARATO: WIF CODEC ENGINE (V3.2 - SUFFIX DISCIPLINE)
 * CLASIFICACIÓN: CORE CODEC (ESTRATO L1)
 * RESPONSABILIDAD: ENVOLTORIO WIF CON VERSIÓN DE RED Y MARCADOR COMPRIMIDO
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. VERSION SOVEREIGNTY: El primer byte del envoltorio identifica la
 *    red; un byte desconocido es un fallo de codificación, no una red
 *    implícita.
 * 2. SUFFIX DISCIPLINE: Un material interno de 33 bytes exige el
 *    marcador 0x01; cualquier otro sufijo es ilegal.
 * 3. CHECKSUM ENFORCEMENT: El checksum truncado se verifica siempre en
 *    la decodificación antes de liberar el escalar secreto.
 * =================================================================
 */

use crate::base58;
use crate::errors::CodecError;
use crate::network::Network;
use qvault_core_math::hashing::checksum;
use qvault_core_math::private_key::PrivateKey;
use serde::Serialize;

/// Marcador de compresión adjunto al escalar en la variante comprimida.
const COMPRESSED_WIF_SUFFIX: u8 = 0x01;
/// Ancho del material interno sin marcador (escalar crudo).
const PLAIN_WIF_PAYLOAD_SIZE: usize = 32;
/// Ancho del material interno con marcador comprimido.
const COMPRESSED_WIF_PAYLOAD_SIZE: usize = 33;

/// Variante del envoltorio WIF.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum WifFormat {
    /// Envoltorio sin marcador: la llave pública asociada es no comprimida.
    #[serde(rename = "wif")]
    Wif,
    /// Envoltorio con marcador 0x01: llave pública comprimida.
    #[serde(rename = "wif-compressed")]
    WifCompressed,
}

impl WifFormat {
    /// Etiqueta nominal de la variante.
    #[must_use]
    pub fn as_label(&self) -> &'static str {
        match self {
            WifFormat::Wif => "wif",
            WifFormat::WifCompressed => "wif-compressed",
        }
    }
}

/// Resultado estructurado de la decodificación de un WIF.
#[derive(Debug, Clone)]
pub struct DecodedWif {
    /// Escalar secreto recuperado (rango certificado por el estrato L1).
    pub private_key: PrivateKey,
    /// Variante del envoltorio.
    pub format: WifFormat,
    /// Checksum truncado transportado por el envoltorio.
    pub checksum: [u8; 4],
    /// Red identificada por el byte de versión.
    pub network: Network,
}

/**
 * Codifica un escalar secreto como WIF en la variante y red solicitadas.
 */
#[must_use]
pub fn private_key_to_wif(
    private_key: &PrivateKey,
    format: WifFormat,
    network: Network,
) -> String {
    let mut envelope_payload = Vec::with_capacity(1 + COMPRESSED_WIF_PAYLOAD_SIZE);
    envelope_payload.push(network.wif_version_byte());
    envelope_payload.extend_from_slice(&private_key.to_bytes());
    if format == WifFormat::WifCompressed {
        envelope_payload.push(COMPRESSED_WIF_SUFFIX);
    }
    base58::check_encode(&envelope_payload)
}

/**
 * Decodifica un WIF a su estructura nominal.
 *
 * # Errors:
 * Alfabeto ilegal, checksum corrupto, byte de versión desconocido,
 * longitud interna fuera de {32, 33} o sufijo ilegal.
 */
pub fn decode_wif(wif_text: &str) -> Result<DecodedWif, CodecError> {
    let raw_envelope = base58::decode(wif_text)?;
    if raw_envelope.len() < 1 + PLAIN_WIF_PAYLOAD_SIZE + 4 {
        return Err(CodecError::InvalidWifLength {
            got: raw_envelope.len().saturating_sub(5),
        });
    }

    let (body, checksum_bytes) = raw_envelope.split_at(raw_envelope.len() - 4);
    if checksum(body) != checksum_bytes {
        return Err(CodecError::ChecksumMismatch);
    }

    let network = Network::from_wif_version_byte(body[0])?;
    let inner_material = &body[1..];

    let (scalar_bytes, format) = match inner_material.len() {
        PLAIN_WIF_PAYLOAD_SIZE => (inner_material, WifFormat::Wif),
        COMPRESSED_WIF_PAYLOAD_SIZE => {
            let suffix_byte = inner_material[COMPRESSED_WIF_PAYLOAD_SIZE - 1];
            if suffix_byte != COMPRESSED_WIF_SUFFIX {
                return Err(CodecError::InvalidWifSuffix { got: suffix_byte });
            }
            (
                &inner_material[..PLAIN_WIF_PAYLOAD_SIZE],
                WifFormat::WifCompressed,
            )
        }
        other => return Err(CodecError::InvalidWifLength { got: other }),
    };

    let mut transported_checksum = [0u8; 4];
    transported_checksum.copy_from_slice(checksum_bytes);

    Ok(DecodedWif {
        private_key: PrivateKey::from_bytes(scalar_bytes)?,
        format,
        checksum: transported_checksum,
        network,
    })
}

/// Extrae el escalar secreto de un WIF.
pub fn wif_to_private_key(wif_text: &str) -> Result<PrivateKey, CodecError> {
    Ok(decode_wif(wif_text)?.private_key)
}

/// Extrae la variante de un WIF.
pub fn get_wif_format(wif_text: &str) -> Result<WifFormat, CodecError> {
    Ok(decode_wif(wif_text)?.format)
}

/// Extrae el checksum transportado por un WIF.
pub fn get_wif_checksum(wif_text: &str) -> Result<[u8; 4], CodecError> {
    Ok(decode_wif(wif_text)?.checksum)
}

/// Extrae la red identificada por el byte de versión de un WIF.
pub fn get_wif_network(wif_text: &str) -> Result<Network, CodecError> {
    Ok(decode_wif(wif_text)?.network)
}
