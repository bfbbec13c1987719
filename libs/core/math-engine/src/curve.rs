// [libs/core/math-engine/src/curve.rs]
/*!
 * =================================================================
 * APARATO: AFFINE CURVE ENGINE (V3.2 - GROUP LAW SEALED)
 * CLASIFICACIÓN: CORE MATH (ESTRATO L1)
 * RESPONSABILIDAD: LEYES DE GRUPO AFINES PARA SECP256K1
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. SINGULARITY DISPATCH: La adición de cuerda exige $x_1 \neq x_2$;
 *    la colisión de abscisas se despacha a duplicación cuando las
 *    ordenadas coinciden y colapsa a error de infinito cuando son
 *    opuestas. El elemento neutro no es representable en este estrato.
 * 2. MSB CONSUMPTION: La multiplicación escalar inicializa el
 *    acumulador con el punto base, consumiendo el bit más significativo
 *    antes del bucle double-and-add.
 * 3. NOMINAL PURITY: Nomenclatura descriptiva absoluta
 *    (lambda -> chord_slope / tangent_slope).
 *
 * # Mathematical Proof (Weierstrass secp256k1):
 * Sobre $y^2 = x^3 + 7$ en $\mathbb{F}_p$, la cuerda entre dos puntos
 * distintos y la tangente en un punto definen la ley de grupo:
 * $x_3 = \lambda^2 - x_1 - x_2$, $y_3 = \lambda(x_1 - x_3) - y_1$.
 * =================================================================
 */

use crate::arithmetic::{mod_inv, reduce_euclidean};
use crate::errors::MathError;
use crate::field::{
    GENERATOR_POINT_X, GENERATOR_POINT_Y, SECP256K1_CURVE_ORDER, SECP256K1_FIELD_PRIME,
};
use num_bigint::BigInt;
use num_traits::Zero;
use tracing::instrument;

/// Punto afín $(x, y)$ de la curva secp256k1.
///
/// El punto al infinito no es representable; las operaciones que lo
/// producirían retornan `MathError::PointAtInfinity`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AffinePoint {
    /// Abscisa en $[0, p)$.
    pub x: BigInt,
    /// Ordenada en $[0, p)$.
    pub y: BigInt,
}

/// Materializa el punto generador G.
#[inline(always)]
#[must_use]
pub fn generator_point() -> AffinePoint {
    AffinePoint {
        x: GENERATOR_POINT_X.clone(),
        y: GENERATOR_POINT_Y.clone(),
    }
}

/// Motor unificado para la ejecución de leyes de grupo en coordenadas afines.
pub struct UnifiedCurveEngine;

impl UnifiedCurveEngine {
    /**
     * Adición de cuerda: $P_1 + P_2$ con $x_1 \neq x_2$.
     *
     * # Errors:
     * Retorna `MathError::PointAtInfinity` en la colisión de abscisas
     * con ordenadas opuestas. La colisión con ordenadas idénticas se
     * despacha internamente a la duplicación técnica.
     */
    #[instrument(level = "trace", skip_all)]
    pub fn point_add(
        point_alpha: &AffinePoint,
        point_beta: &AffinePoint,
    ) -> Result<AffinePoint, MathError> {
        if point_alpha.x == point_beta.x {
            if point_alpha.y == point_beta.y {
                // Los puntos colisionan en el plano: duplicación técnica.
                return Self::point_double(point_alpha);
            }
            // Puntos inversos: el resultado es el elemento neutro.
            return Err(MathError::PointAtInfinity);
        }

        // chord_slope = (y2 - y1) / (x2 - x1)
        let ordinate_difference = &point_beta.y - &point_alpha.y;
        let abscissa_difference = &point_beta.x - &point_alpha.x;
        let chord_slope = reduce_euclidean(
            &(ordinate_difference * mod_inv(&abscissa_difference, &SECP256K1_FIELD_PRIME)?),
            &SECP256K1_FIELD_PRIME,
        );

        // x3 = slope^2 - x1 - x2
        let output_x = reduce_euclidean(
            &(&chord_slope * &chord_slope - &point_alpha.x - &point_beta.x),
            &SECP256K1_FIELD_PRIME,
        );

        // y3 = slope * (x1 - x3) - y1
        let output_y = reduce_euclidean(
            &(&chord_slope * (&point_alpha.x - &output_x) - &point_alpha.y),
            &SECP256K1_FIELD_PRIME,
        );

        Ok(AffinePoint {
            x: output_x,
            y: output_y,
        })
    }

    /**
     * Duplicación de tangente: $2P$.
     *
     * # Mathematical Proof:
     * Con $a = 0$ la pendiente de la tangente es $\lambda = 3x^2 / 2y$.
     */
    #[instrument(level = "trace", skip_all)]
    pub fn point_double(point: &AffinePoint) -> Result<AffinePoint, MathError> {
        // tangent_slope = 3 * x^2 / (2 * y)
        let three_x_squared = BigInt::from(3u32) * &point.x * &point.x;
        let doubled_ordinate = BigInt::from(2u32) * &point.y;
        let tangent_slope = reduce_euclidean(
            &(three_x_squared * mod_inv(&doubled_ordinate, &SECP256K1_FIELD_PRIME)?),
            &SECP256K1_FIELD_PRIME,
        );

        // x3 = slope^2 - 2 * x
        let output_x = reduce_euclidean(
            &(&tangent_slope * &tangent_slope - BigInt::from(2u32) * &point.x),
            &SECP256K1_FIELD_PRIME,
        );

        // y3 = slope * (x - x3) - y
        let output_y = reduce_euclidean(
            &(&tangent_slope * (&point.x - &output_x) - &point.y),
            &SECP256K1_FIELD_PRIME,
        );

        Ok(AffinePoint {
            x: output_x,
            y: output_y,
        })
    }

    /**
     * Multiplicación escalar double-and-add (MSB a LSB).
     *
     * # Mathematical Proof:
     * El bit más significativo se consume inicializando el acumulador
     * con el punto base; cada bit restante duplica y, si está activo,
     * suma el punto base.
     *
     * # Errors:
     * Retorna `MathError::ScalarOutOfRange` si $k = 0$ o $k \geq n$.
     */
    #[instrument(level = "trace", skip_all)]
    pub fn scalar_multiply(
        base_point: &AffinePoint,
        scalar: &BigInt,
    ) -> Result<AffinePoint, MathError> {
        if scalar.is_zero() || *scalar >= *SECP256K1_CURVE_ORDER {
            return Err(MathError::ScalarOutOfRange);
        }

        let binary_expansion = scalar.to_str_radix(2);
        let mut accumulator = base_point.clone();

        for bit_symbol in binary_expansion.chars().skip(1) {
            accumulator = Self::point_double(&accumulator)?;
            if bit_symbol == '1' {
                accumulator = Self::point_add(&accumulator, base_point)?;
            }
        }

        Ok(accumulator)
    }
}
