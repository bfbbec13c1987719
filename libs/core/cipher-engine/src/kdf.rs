// [libs/core/cipher-engine/src/kdf.rs]
/*!
 * =================================================================
 * APARATO: KEY DERIVATION ENGINE (V3.2 - DUAL PROFILE)
 * CLASIFICACIÓN: CORE CIPHER (ESTRATO L1)
 * RESPONSABILIDAD: NORMALIZACIÓN NFC Y PERFILES SCRYPT DEL PROTOCOLO
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. NFC SOVEREIGNTY: Toda frase maestra atraviesa la normalización
 *    Unicode NFC antes de su codificación UTF-8 hacia scrypt; este paso
 *    es estructural para frases no-ASCII.
 * 2. DUAL COST PROFILE: La rama de frase maestra usa el perfil pesado
 *    (N=16384, r=8, p=8, ~16 MiB); la rama de punto usa el perfil
 *    ligero (N=1024, r=1, p=1, ~1 MiB).
 * =================================================================
 */

use crate::errors::CipherError;
use scrypt::Params;
use tracing::trace;
use unicode_normalization::UnicodeNormalization;

/// log2(N) del perfil pesado (N = 16384).
const PASSPHRASE_PROFILE_LOG_N: u8 = 14;
/// log2(N) del perfil ligero (N = 1024).
const POINT_PROFILE_LOG_N: u8 = 10;

/// Normaliza una frase maestra a NFC.
#[inline(always)]
#[must_use]
pub fn normalize_passphrase(passphrase: &str) -> String {
    passphrase.nfc().collect()
}

fn run_scrypt(
    password_material: &[u8],
    salt_material: &[u8],
    log_n: u8,
    block_size: u32,
    parallelism: u32,
    output_buffer: &mut [u8],
) -> Result<(), CipherError> {
    let cost_profile = Params::new(log_n, block_size, parallelism, output_buffer.len())
        .map_err(|fault| CipherError::DerivationFault(fault.to_string()))?;
    scrypt::scrypt(password_material, salt_material, &cost_profile, output_buffer)
        .map_err(|fault| CipherError::DerivationFault(fault.to_string()))
}

/**
 * Perfil pesado: scrypt(NFC(frase), sal, 16384, 8, 8) con salida de 64 bytes.
 */
pub fn derive_passphrase_key64(
    passphrase: &str,
    salt_material: &[u8],
) -> Result<[u8; 64], CipherError> {
    trace!("🔑 [KDF]: Executing heavy scrypt profile (64-byte output).");
    let normalized = normalize_passphrase(passphrase);
    let mut output_buffer = [0u8; 64];
    run_scrypt(
        normalized.as_bytes(),
        salt_material,
        PASSPHRASE_PROFILE_LOG_N,
        8,
        8,
        &mut output_buffer,
    )?;
    Ok(output_buffer)
}

/**
 * Perfil pesado con salida truncada a 32 bytes (factor de frase).
 */
pub fn derive_passphrase_key32(
    passphrase: &str,
    salt_material: &[u8],
) -> Result<[u8; 32], CipherError> {
    trace!("🔑 [KDF]: Executing heavy scrypt profile (32-byte output).");
    let normalized = normalize_passphrase(passphrase);
    let mut output_buffer = [0u8; 32];
    run_scrypt(
        normalized.as_bytes(),
        salt_material,
        PASSPHRASE_PROFILE_LOG_N,
        8,
        8,
        &mut output_buffer,
    )?;
    Ok(output_buffer)
}

/**
 * Perfil ligero: scrypt(punto_de_frase, sal, 1024, 1, 1) con salida de 64 bytes.
 *
 * El material de contraseña es la serialización comprimida del punto de
 * frase; la sal es hash_de_dirección ‖ entropía_de_propietario.
 */
pub fn derive_point_key64(
    pass_point_bytes: &[u8],
    salt_material: &[u8],
) -> Result<[u8; 64], CipherError> {
    trace!("🔑 [KDF]: Executing light scrypt profile (point material).");
    let mut output_buffer = [0u8; 64];
    run_scrypt(
        pass_point_bytes,
        salt_material,
        POINT_PROFILE_LOG_N,
        1,
        1,
        &mut output_buffer,
    )?;
    Ok(output_buffer)
}
