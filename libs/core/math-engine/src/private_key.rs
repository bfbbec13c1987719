// INICIO DEL ARCHIVO [libs/core/math-engine/src/private_key.rs]
// =================================================================
// APARATO: PRIVATE KEY MANAGER (V3.0 - RANGE SEALED)
// RESPONSABILIDAD: GESTIÓN SEGURA DE ESCALARES SECRETOS
// =================================================================

use crate::arithmetic::{integer_from_bytes_be, integer_to_u256_be, reduce_euclidean, U256_BYTE_SIZE};
use crate::errors::MathError;
use crate::field::SECP256K1_CURVE_ORDER;
use num_bigint::BigInt;
use num_traits::Zero;

/// Wrapper seguro para una clave privada de curva elíptica secp256k1.
/// Garantiza: 0 < k < n
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrivateKey {
    raw_scalar_bytes: [u8; 32],
}

impl PrivateKey {
    /// Intenta construir una clave privada a partir de bytes crudos.
    ///
    /// # Errors:
    /// `MathError::InvalidLength` si el buffer no mide 32 bytes;
    /// `MathError::ScalarOutOfRange` si el escalar viola 0 < k < n.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, MathError> {
        if bytes.len() != U256_BYTE_SIZE {
            return Err(MathError::InvalidLength {
                expected: U256_BYTE_SIZE,
                got: bytes.len(),
            });
        }

        let scalar_value = integer_from_bytes_be(bytes);
        if scalar_value.is_zero() || scalar_value >= *SECP256K1_CURVE_ORDER {
            return Err(MathError::ScalarOutOfRange);
        }

        let mut raw_scalar_bytes = [0u8; 32];
        raw_scalar_bytes.copy_from_slice(bytes);
        Ok(Self { raw_scalar_bytes })
    }

    /// Serializa la clave a 32 bytes.
    #[inline]
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 32] {
        self.raw_scalar_bytes
    }

    /// Proyección del escalar secreto a precisión arbitraria.
    #[inline(always)]
    #[must_use]
    pub fn as_scalar(&self) -> BigInt {
        integer_from_bytes_be(&self.raw_scalar_bytes)
    }

    /**
     * Producto modular de dos escalares secretos: $(a \cdot b) \bmod n$.
     *
     * Con $a, b \in (0, n)$ y $n$ primo, el producto reducido nunca es
     * nulo, por lo que el resultado conserva el invariante de rango.
     */
    pub fn multiply_modulo_order(&self, other: &PrivateKey) -> Result<PrivateKey, MathError> {
        let product = reduce_euclidean(
            &(self.as_scalar() * other.as_scalar()),
            &SECP256K1_CURVE_ORDER,
        );
        PrivateKey::from_bytes(&integer_to_u256_be(&product)?)
    }
}

// FIN DEL ARCHIVO [libs/core/math-engine/src/private_key.rs]
