// [libs/core/math-engine/src/arithmetic.rs]
/*!
 * =================================================================
 * APARATO: ARBITRARY PRECISION ARITHMETIC ENGINE (V3.0 - SOBERANO)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: CONVERSIÓN BIG-ENDIAN DE ANCHO FIJO Y EUCLIDES EXTENDIDO
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. WIDTH SOVEREIGNTY: Toda serialización destinada a bloques AES o a
 *    sobres Base58Check exige ancho fijo con relleno de ceros a la
 *    izquierda. Un codificador de ancho mínimo corrompe el material.
 * 2. NOMINAL PURITY: Erradicación de abreviaciones en limbs y buffers.
 *
 * # Mathematical Proof (Reducción Euclidiana):
 * Para cualquier $a \in \mathbb{Z}$ y módulo $n > 0$, el residuo
 * euclidiano $((a \bmod n) + n) \bmod n$ pertenece a $[0, n)$,
 * independientemente del signo de $a$.
 * =================================================================
 */

use crate::errors::MathError;
use num_bigint::{BigInt, Sign};
use num_traits::{One, Zero};

/// Ancho canónico en bytes de un escalar de 256 bits.
pub const U256_BYTE_SIZE: usize = 32;

/**
 * Reduce un entero con signo al residuo euclidiano en [0, n).
 */
#[inline(always)]
#[must_use]
pub fn reduce_euclidean(value: &BigInt, modulus: &BigInt) -> BigInt {
    ((value % modulus) + modulus) % modulus
}

/**
 * Inverso multiplicativo modular vía Algoritmo de Euclides Extendido.
 *
 * # Mathematical Proof:
 * Mantiene los invariantes $lm \cdot a \equiv low \pmod n$ y
 * $hm \cdot a \equiv high \pmod n$; al converger $low = 1$, el
 * coeficiente $lm$ es el inverso buscado.
 *
 * # Errors:
 * Retorna `MathError::NonInvertibleElement` si $a \equiv 0 \pmod n$.
 * El resultado es indefinido cuando $\gcd(a, n) \neq 1$; los módulos
 * de este motor son primos, por lo que el único caso degenerado es el cero.
 */
pub fn mod_inv(value: &BigInt, modulus: &BigInt) -> Result<BigInt, MathError> {
    let mut low_remainder = reduce_euclidean(value, modulus);
    if low_remainder.is_zero() {
        return Err(MathError::NonInvertibleElement);
    }

    let mut high_remainder = modulus.clone();
    let mut low_coefficient = BigInt::one();
    let mut high_coefficient = BigInt::zero();

    while low_remainder > BigInt::one() {
        let quotient_ratio = &high_remainder / &low_remainder;
        let next_coefficient = &high_coefficient - &low_coefficient * &quotient_ratio;
        let next_remainder = &high_remainder - &low_remainder * &quotient_ratio;

        high_coefficient = low_coefficient;
        high_remainder = low_remainder;
        low_coefficient = next_coefficient;
        low_remainder = next_remainder;
    }

    Ok(reduce_euclidean(&low_coefficient, modulus))
}

/**
 * Construye un entero no negativo desde un buffer Big-Endian.
 */
#[inline(always)]
#[must_use]
pub fn integer_from_bytes_be(bytes_input: &[u8]) -> BigInt {
    BigInt::from_bytes_be(Sign::Plus, bytes_input)
}

/**
 * Serializa un entero no negativo a un buffer Big-Endian de ancho fijo.
 *
 * Rellena con ceros a la izquierda hasta alcanzar `width` bytes. Este es
 * el único codificador autorizado en las fronteras de bloque AES (16 B)
 * y en los campos de sobre de ancho canónico (4 B / 32 B).
 *
 * # Errors:
 * Retorna `MathError::IntegerOverflow` si la magnitud no cabe en `width`.
 */
pub fn integer_to_fixed_bytes_be(value: &BigInt, width: usize) -> Result<Vec<u8>, MathError> {
    let (sign, magnitude_bytes) = value.to_bytes_be();
    if sign == Sign::Minus {
        return Err(MathError::IntegerOverflow { width });
    }
    if magnitude_bytes.len() > width {
        return Err(MathError::IntegerOverflow { width });
    }

    let mut padded_output = vec![0u8; width];
    padded_output[width - magnitude_bytes.len()..].copy_from_slice(&magnitude_bytes);
    Ok(padded_output)
}

/**
 * Serializa un entero a exactamente 32 bytes Big-Endian (escalar U256).
 */
#[inline(always)]
pub fn integer_to_u256_be(value: &BigInt) -> Result<[u8; 32], MathError> {
    let padded = integer_to_fixed_bytes_be(value, U256_BYTE_SIZE)?;
    let mut output_bytes = [0u8; 32];
    output_bytes.copy_from_slice(&padded);
    Ok(output_bytes)
}
