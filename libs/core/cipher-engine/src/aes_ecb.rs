// [libs/core/cipher-engine/src/aes_ecb.rs]
/*!
 * =================================================================
 * APARATO: AES BLOCK ENGINE (V3.0 - SINGLE BLOCK DISCIPLINE)
 * CLASIFICACIÓN: CORE CIPHER (ESTRATO L1)
 * RESPONSABILIDAD: AES-256 SOBRE BLOQUES INDEPENDIENTES DE 16 BYTES
 *
 * VISION HIPER-HOLÍSTICA:
 * El protocolo cifra bloques de 16 bytes cuyos textos planos ya fueron
 * enmascarados por XOR con material scrypt independiente por bloque; el
 * modo ECB sobre bloques sueltos es por tanto el modo correcto y no debe
 * sustituirse por CBC/CTR. Todo operando entra con ancho fijo.
 * =================================================================
 */

use aes::cipher::generic_array::GenericArray;
use aes::cipher::{BlockDecrypt, BlockEncrypt, KeyInit};
use aes::Aes256;

/// Ancho de bloque AES.
pub const AES_BLOCK_SIZE: usize = 16;

/// Cifra un bloque de 16 bytes bajo una llave AES-256.
#[inline(always)]
#[must_use]
pub fn encrypt_block_16(key_material: &[u8; 32], plaintext_block: &[u8; 16]) -> [u8; 16] {
    let cipher_engine = Aes256::new(&GenericArray::from(*key_material));
    let mut block_buffer = GenericArray::from(*plaintext_block);
    cipher_engine.encrypt_block(&mut block_buffer);

    let mut output = [0u8; AES_BLOCK_SIZE];
    output.copy_from_slice(&block_buffer);
    output
}

/// Descifra un bloque de 16 bytes bajo una llave AES-256.
#[inline(always)]
#[must_use]
pub fn decrypt_block_16(key_material: &[u8; 32], ciphertext_block: &[u8; 16]) -> [u8; 16] {
    let cipher_engine = Aes256::new(&GenericArray::from(*key_material));
    let mut block_buffer = GenericArray::from(*ciphertext_block);
    cipher_engine.decrypt_block(&mut block_buffer);

    let mut output = [0u8; AES_BLOCK_SIZE];
    output.copy_from_slice(&block_buffer);
    output
}

/// XOR de ancho fijo entre dos operandos de 16 bytes.
///
/// Los operandos llegan como slices porque provienen de particiones de
/// buffers mayores; la longitud se certifica antes de mezclar.
#[inline(always)]
#[must_use]
pub fn xor_block_16(left_operand: &[u8], right_operand: &[u8]) -> [u8; 16] {
    debug_assert_eq!(left_operand.len(), AES_BLOCK_SIZE);
    debug_assert_eq!(right_operand.len(), AES_BLOCK_SIZE);

    let mut output = [0u8; AES_BLOCK_SIZE];
    for index in 0..AES_BLOCK_SIZE {
        output[index] = left_operand[index] ^ right_operand[index];
    }
    output
}
