// [libs/core/math-engine/src/errors.rs]
// =================================================================
// APARATO: MATH ERRORS
// RESPONSABILIDAD: CATÁLOGO DE FALLOS ARITMÉTICOS Y GEOMÉTRICOS
// ESTADO: ELITE COMPLIANCE (FULL RUSTDOC)
// =================================================================

use thiserror::Error;

/// Define los fallos posibles del motor matemático secp256k1.
///
/// Este enum centraliza los colapsos aritméticos (inversión de cero,
/// desbordamiento de ancho fijo) y las violaciones geométricas (escalar
/// fuera de rango, codificación SEC1 ilegal) que los estratos superiores
/// traducen a su propia taxonomía.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum MathError {
    /// El material binario recibido no tiene el ancho canónico esperado.
    #[error("LENGTH_FAULT: longitud inválida (esperado: {expected}, recibido: {got})")]
    InvalidLength {
        /// Ancho canónico requerido por la operación.
        expected: usize,
        /// Ancho efectivamente recibido.
        got: usize,
    },

    /// El escalar no satisface la ley 0 < k < n del orden de la curva.
    #[error("SCALAR_RANGE_VIOLATION: el escalar no pertenece al intervalo (0, n)")]
    ScalarOutOfRange,

    /// Intento de invertir un elemento sin inverso multiplicativo.
    #[error("DIV_ZERO_EXHAUSTION: el elemento no es invertible módulo el primo")]
    NonInvertibleElement,

    /// La ley de grupo produjo el elemento neutro, que no es representable
    /// en coordenadas afines.
    #[error("INFINITY_COLLAPSE: la operación degenera en el punto al infinito")]
    PointAtInfinity,

    /// La ráfaga de bytes no es una codificación SEC1 legal.
    #[error("POINT_ENCODING_FAULT: {0}")]
    InvalidPointEncoding(String),

    /// El entero no cabe en el ancho fijo solicitado.
    #[error("WIDTH_OVERFLOW: el entero desborda el ancho fijo de {width} bytes")]
    IntegerOverflow {
        /// Ancho fijo solicitado por el llamador.
        width: usize,
    },
}
