// [libs/core/math-engine/src/field.rs]
/*!
 * =================================================================
 * APARATO: FINITE FIELD CONSTANTS ENGINE (V3.1 - AFFINE GOLD)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: CONSTANTES DEL CUERPO Fp Y RAÍZ CUADRADA MODULAR
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. SINGLE SOURCE OF TRUTH: Los literales del dominio secp256k1 viven
 *    únicamente en este aparato; ningún estrato superior re-declara
 *    el primo, el orden ni el generador.
 * 2. LAZY SOVEREIGNTY: Materialización perezosa de las constantes de
 *    precisión arbitraria mediante 'once_cell'.
 *
 * # Mathematical Proof (secp256k1 Field):
 * Opera sobre el cuerpo finito definido por $p = 2^{256} - 2^{32} - 977$.
 * Como $p \equiv 3 \pmod 4$, la raíz cuadrada modular admite la forma
 * cerrada $\sqrt{\alpha} = \alpha^{(p+1)/4} \bmod p$.
 * =================================================================
 */

use crate::arithmetic::reduce_euclidean;
use num_bigint::BigInt;
use once_cell::sync::Lazy;

/// El primo del cuerpo secp256k1 (p = 2^256 - 2^32 - 977).
pub static SECP256K1_FIELD_PRIME: Lazy<BigInt> = Lazy::new(|| {
    BigInt::parse_bytes(
        b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEFFFFFC2F",
        16,
    )
    .expect("CONSTANT_FAULT: literal del primo corrupto")
});

/// El orden n del grupo generado por G.
pub static SECP256K1_CURVE_ORDER: Lazy<BigInt> = Lazy::new(|| {
    BigInt::parse_bytes(
        b"FFFFFFFFFFFFFFFFFFFFFFFFFFFFFFFEBAAEDCE6AF48A03BBFD25E8CD0364141",
        16,
    )
    .expect("CONSTANT_FAULT: literal del orden corrupto")
});

/// Coordenada X del punto generador G.
pub static GENERATOR_POINT_X: Lazy<BigInt> = Lazy::new(|| {
    BigInt::parse_bytes(
        b"79BE667EF9DCBBAC55A06295CE870B07029BFCDB2DCE28D959F2815B16F81798",
        16,
    )
    .expect("CONSTANT_FAULT: literal Gx corrupto")
});

/// Coordenada Y del punto generador G.
pub static GENERATOR_POINT_Y: Lazy<BigInt> = Lazy::new(|| {
    BigInt::parse_bytes(
        b"483ADA7726A3C4655DA4FBFC0E1108A8FD17B448A68554199C47D08FFB10D4B8",
        16,
    )
    .expect("CONSTANT_FAULT: literal Gy corrupto")
});

/// Exponente de raíz cuadrada modular: (p + 1) / 4.
static SQUARE_ROOT_EXPONENT: Lazy<BigInt> =
    Lazy::new(|| (&*SECP256K1_FIELD_PRIME + BigInt::from(1u32)) / BigInt::from(4u32));

/// Coeficiente B de la ecuación de Weierstrass $y^2 = x^3 + 7$.
pub const CURVE_COEFFICIENT_B: u32 = 7;

/**
 * Raíz cuadrada modular sobre Fp por exponenciación cerrada.
 *
 * # Mathematical Proof:
 * Si $\alpha$ es residuo cuadrático, $(\alpha^{(p+1)/4})^2 = \alpha$.
 * Si no lo es, el resultado es una raíz de $-\alpha$; el llamador decide
 * la validez por verificación posterior (paridad o pertenencia a la curva).
 */
#[inline(always)]
#[must_use]
pub fn sqrt_mod_prime(alpha: &BigInt) -> BigInt {
    reduce_euclidean(alpha, &SECP256K1_FIELD_PRIME)
        .modpow(&SQUARE_ROOT_EXPONENT, &SECP256K1_FIELD_PRIME)
}

/**
 * Evalúa el lado derecho de la ecuación de la curva: $x^3 + 7 \bmod p$.
 */
#[inline(always)]
#[must_use]
pub fn curve_equation_rhs(x_coordinate: &BigInt) -> BigInt {
    let x_cubed = x_coordinate.modpow(&BigInt::from(3u32), &SECP256K1_FIELD_PRIME);
    reduce_euclidean(
        &(x_cubed + BigInt::from(CURVE_COEFFICIENT_B)),
        &SECP256K1_FIELD_PRIME,
    )
}
