// [tests/mirror/libs/core/cipher_engine/ec_multiply_integrity.test.rs]
/*!
 * =================================================================
 * APARATO: EC-MULTIPLY VAULT CERTIFIER (V3.4 - TWO FACTOR EVIDENCE)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-CIPHER
 * RESPONSABILIDAD: CERTIFICACIÓN DEL CICLO INTERMEDIO -> ACUÑADO ->
 *                  DESCIFRADO EN AMBAS RAMAS DE ENTROPÍA
 * =================================================================
 */

use qvault_core_cipher::prelude::*;
use qvault_core_codec::base58::check_decode;

const MASTER_PASSPHRASE: &str = "qtum123";
/// Sal de propietario determinista de 8 bytes (rama sin lot/sequence).
const FIXED_OWNER_SALT_8: [u8; 8] = [0x75, 0x1a, 0x2c, 0x93, 0x40, 0xee, 0x07, 0x58];
/// Sal de propietario determinista de 4 bytes (rama con lot/sequence).
const FIXED_OWNER_SALT_4: [u8; 4] = [0xba, 0x5e, 0xd1, 0x07];
/// Semilla determinista de 24 bytes para el acuñado.
const FIXED_SEED_24: [u8; 24] = [
    0x99, 0x2d, 0x01, 0x6e, 0x72, 0xc8, 0x3b, 0x5f, 0x0a, 0x41, 0xd3, 0x8c, 0x27, 0xb0, 0x64,
    0xf1, 0x1e, 0x55, 0xaa, 0x38, 0x9c, 0x03, 0xe7, 0x46,
];

#[cfg(test)]
mod tests {
    use super::*;

    /**
     * CERTIFICACIÓN: Rama sin lot/sequence (magia ...E253).
     */
    #[test]
    fn certify_mint_and_decrypt_without_lot_sequence() {
        let intermediate =
            intermediate_code(MASTER_PASSPHRASE, None, Some(&FIXED_OWNER_SALT_8))
                .expect("VAULT_FAULT: código intermedio sin lot/sequence");

        // La entropía de propietario es la sal completa de 8 bytes.
        let payload = check_decode(&intermediate).unwrap();
        assert_eq!(payload.len(), 49);
        assert_eq!(&payload[8..16], &FIXED_OWNER_SALT_8[..]);

        let minted = create_new_encrypted_wif(
            &intermediate,
            PublicKeyForm::Uncompressed,
            Some(&FIXED_SEED_24),
            Network::Mainnet,
        )
        .expect("VAULT_FAULT: acuñado sin lot/sequence");
        assert_eq!(minted.seed, hex::encode(FIXED_SEED_24));

        let opened = bip38_decrypt(&minted.encrypted_wif, MASTER_PASSPHRASE, Network::Mainnet)
            .expect("VAULT_FAULT: descifrado del sobre acuñado");

        assert_eq!(opened.address, minted.address);
        assert_eq!(opened.public_key, minted.public_key);
        assert_eq!(opened.wif_format, WifFormat::Wif);
        assert_eq!(opened.seed.as_deref(), Some(hex::encode(FIXED_SEED_24).as_str()));
        assert!(opened.lot_sequence.is_none());
    }

    /**
     * CERTIFICACIÓN: Rama con lot/sequence (magia ...E251, lot 263183/1).
     */
    #[test]
    fn certify_mint_and_decrypt_with_lot_sequence() {
        let pair = LotSequence::new(263_183, 1).expect("VAULT_FAULT: par dentro de rango");
        let intermediate = intermediate_code(
            MASTER_PASSPHRASE,
            Some(pair),
            Some(&FIXED_OWNER_SALT_4),
        )
        .expect("VAULT_FAULT: código intermedio con lot/sequence");

        // Entropía = sal(4) ‖ u32_be(lot * 4096 + sequence).
        let payload = check_decode(&intermediate).unwrap();
        let expected_word: u32 = 263_183 * 4096 + 1;
        assert_eq!(&payload[8..12], &FIXED_OWNER_SALT_4[..]);
        assert_eq!(&payload[12..16], &expected_word.to_be_bytes()[..]);

        let minted = create_new_encrypted_wif(
            &intermediate,
            PublicKeyForm::Compressed,
            Some(&FIXED_SEED_24),
            Network::Mainnet,
        )
        .expect("VAULT_FAULT: acuñado con lot/sequence");

        let opened = bip38_decrypt(&minted.encrypted_wif, MASTER_PASSPHRASE, Network::Mainnet)
            .expect("VAULT_FAULT: descifrado del sobre acuñado");

        assert_eq!(opened.address, minted.address);
        assert_eq!(opened.wif_format, WifFormat::WifCompressed);
        let recovered_pair = opened.lot_sequence.expect("VAULT_FAULT: par ausente");
        assert_eq!(recovered_pair.lot(), 263_183);
        assert_eq!(recovered_pair.sequence(), 1);
    }

    /**
     * CERTIFICACIÓN: Disciplina de parámetros del código intermedio.
     */
    #[test]
    fn certify_parameter_discipline() {
        // Rangos del par lot/sequence.
        assert!(matches!(
            LotSequence::new(99_999, 0),
            Err(CipherError::InvalidParameter(_))
        ));
        assert!(matches!(
            LotSequence::new(100_000, 4096),
            Err(CipherError::InvalidParameter(_))
        ));
        // sequence = 0 es un valor plenamente válido.
        assert!(LotSequence::new(100_000, 0).is_ok());

        // Sal de 4 bytes sin par: ilegal.
        assert!(matches!(
            intermediate_code(MASTER_PASSPHRASE, None, Some(&FIXED_OWNER_SALT_4)),
            Err(CipherError::InvalidParameter(_))
        ));
        // Sal de longitud ajena a {4, 8}: ilegal.
        assert!(matches!(
            intermediate_code(MASTER_PASSPHRASE, None, Some(&[0u8; 6])),
            Err(CipherError::InvalidParameter(_))
        ));
        // Semilla de ancho incorrecto: ilegal.
        let intermediate =
            intermediate_code(MASTER_PASSPHRASE, None, Some(&FIXED_OWNER_SALT_8)).unwrap();
        assert!(matches!(
            create_new_encrypted_wif(
                &intermediate,
                PublicKeyForm::Compressed,
                Some(&[0u8; 16]),
                Network::Mainnet,
            ),
            Err(CipherError::InvalidLength { context: "seed", .. })
        ));
    }
}
