// [tests/mirror/libs/core/math_engine/public_key_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: PUBLIC KEY INTEGRITY CERTIFIER (V3.2 - SEC1 EVIDENCE)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-MATH
 * RESPONSABILIDAD: CERTIFICACIÓN DE PROYECCIONES SEC1 Y MULTIPLICACIÓN
 *                  DE PUNTOS ARBITRARIOS
 * =================================================================
 */

use qvault_core_math::prelude::*;

/// Testigo determinista con bytes no triviales en ambas mitades.
const WITNESS_SCALAR_HEX: &str =
    "cbf4b9f70470856bb4f40f80b87edb90865997ffee6df315ab166d713af433a5";

fn witness_private_key() -> PrivateKey {
    PrivateKey::from_bytes(&hex::decode(WITNESS_SCALAR_HEX).unwrap())
        .expect("MATH_FAULT: testigo dentro del rango (0, n)")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certify_projection_round_trips() {
        let uncompressed = derive_public_key(&witness_private_key(), PublicKeyForm::Uncompressed)
            .expect("MATH_FAULT: derivación no comprimida");
        let compressed = derive_public_key(&witness_private_key(), PublicKeyForm::Compressed)
            .expect("MATH_FAULT: derivación comprimida");

        // compress(uncompress(c)) == c
        let expanded = uncompress_public_key(&compressed).expect("MATH_FAULT: descompresión");
        let recompressed = compress_public_key(&expanded).expect("MATH_FAULT: compresión");
        assert_eq!(recompressed.to_vec(), compressed);

        // uncompress(compress(u)) == u
        let collapsed = compress_public_key(&uncompressed).expect("MATH_FAULT: compresión directa");
        let recovered = uncompress_public_key(&collapsed).expect("MATH_FAULT: expansión directa");
        assert_eq!(recovered.to_vec(), uncompressed);
    }

    #[test]
    fn certify_parity_prefix_discipline() {
        let uncompressed = derive_public_key(&witness_private_key(), PublicKeyForm::Uncompressed)
            .expect("MATH_FAULT: derivación base");
        let compressed = compress_public_key(&uncompressed).unwrap();

        let ordinate_is_odd = uncompressed[64] & 1 == 1;
        let expected_prefix = if ordinate_is_odd { 0x03 } else { 0x02 };
        assert_eq!(compressed[0], expected_prefix);
    }

    #[test]
    fn certify_two_factor_composition_law() {
        // pub(a) * b == pub((a * b) mod n): la ley que sostiene la rama EC.
        let mut alpha_bytes = [0u8; 32];
        alpha_bytes[31] = 0x11;
        alpha_bytes[0] = 0x01;
        let mut beta_bytes = [0u8; 32];
        beta_bytes[31] = 0x2f;
        beta_bytes[15] = 0x09;

        let alpha = PrivateKey::from_bytes(&alpha_bytes).unwrap();
        let beta = PrivateKey::from_bytes(&beta_bytes).unwrap();
        let composed_scalar = alpha
            .multiply_modulo_order(&beta)
            .expect("MATH_FAULT: producto modular");

        let alpha_point = derive_public_key(&alpha, PublicKeyForm::Compressed).unwrap();
        let multiplied = multiply_public_key(&alpha_point, &beta_bytes, PublicKeyForm::Compressed)
            .expect("MATH_FAULT: multiplicación de punto arbitrario");
        let direct = derive_public_key(&composed_scalar, PublicKeyForm::Compressed).unwrap();

        assert_eq!(multiplied, direct);
    }

    #[test]
    fn certify_scalar_range_rejection_on_point_multiplication() {
        let alpha_point = derive_public_key(&witness_private_key(), PublicKeyForm::Compressed)
            .expect("MATH_FAULT: derivación base");
        assert!(matches!(
            multiply_public_key(&alpha_point, &[0u8; 32], PublicKeyForm::Compressed),
            Err(MathError::ScalarOutOfRange)
        ));
    }
}

#[cfg(test)]
mod property_evidence {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(16))]

        /// compress ∘ uncompress es identidad sobre escalares arbitrarios.
        #[test]
        fn projection_round_trip_over_random_scalars(scalar_material in any::<[u8; 32]>()) {
            let Ok(private_key) = PrivateKey::from_bytes(&scalar_material) else {
                // Escalar fuera de (0, n): sin proyección que certificar.
                return Ok(());
            };
            let uncompressed = derive_public_key(&private_key, PublicKeyForm::Uncompressed)
                .expect("MATH_FAULT: derivación no comprimida");
            let compressed = compress_public_key(&uncompressed).unwrap();
            let recovered = uncompress_public_key(&compressed).unwrap();
            prop_assert_eq!(recovered.to_vec(), uncompressed);
        }
    }
}
