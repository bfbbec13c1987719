// [tests/mirror/libs/core/cipher_engine/confirmation_code.test.rs]
/*!
 * =================================================================
 * APARATO: CONFIRMATION CHANNEL CERTIFIER (V3.2 - CUSTODIAN EVIDENCE)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-CIPHER
 * RESPONSABILIDAD: CERTIFICACIÓN DEL CANAL DE CONFIRMACIÓN: EL CUSTODIO
 *                  DE LA FRASE VERIFICA LA DIRECCIÓN SIN CONOCER LA LLAVE
 * =================================================================
 */

use qvault_core_cipher::prelude::*;

const MASTER_PASSPHRASE: &str = "qtum123";
const WRONG_PASSPHRASE: &str = "qtum124";
const FIXED_OWNER_SALT_8: [u8; 8] = [0x75, 0x1a, 0x2c, 0x93, 0x40, 0xee, 0x07, 0x58];
const FIXED_OWNER_SALT_4: [u8; 4] = [0xba, 0x5e, 0xd1, 0x07];
const FIXED_SEED_24: [u8; 24] = [
    0x99, 0x2d, 0x01, 0x6e, 0x72, 0xc8, 0x3b, 0x5f, 0x0a, 0x41, 0xd3, 0x8c, 0x27, 0xb0, 0x64,
    0xf1, 0x1e, 0x55, 0xaa, 0x38, 0x9c, 0x03, 0xe7, 0x46,
];

fn mint_without_lot_sequence() -> MintedEncryptedWif {
    let intermediate =
        intermediate_code(MASTER_PASSPHRASE, None, Some(&FIXED_OWNER_SALT_8)).unwrap();
    create_new_encrypted_wif(
        &intermediate,
        PublicKeyForm::Compressed,
        Some(&FIXED_SEED_24),
        Network::Mainnet,
    )
    .expect("VAULT_FAULT: acuñado de referencia")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn certify_confirmation_under_correct_passphrase() {
        let minted = mint_without_lot_sequence();
        let confirmed = confirm_code(
            MASTER_PASSPHRASE,
            &minted.confirmation_code,
            Network::Mainnet,
        )
        .expect("VAULT_FAULT: confirmación con frase correcta");

        assert_eq!(confirmed.address, minted.address);
        assert_eq!(confirmed.public_key, minted.public_key);
        assert_eq!(confirmed.public_key_form, PublicKeyForm::Compressed);
        assert!(confirmed.lot_sequence.is_none());
    }

    #[test]
    fn certify_rejection_under_wrong_passphrase() {
        let minted = mint_without_lot_sequence();
        let verdict = confirm_code(
            WRONG_PASSPHRASE,
            &minted.confirmation_code,
            Network::Mainnet,
        );
        assert!(matches!(verdict, Err(CipherError::IncorrectPassphrase)));
    }

    #[test]
    fn certify_lot_sequence_recovery_through_the_channel() {
        let pair = LotSequence::new(263_183, 1).unwrap();
        let intermediate =
            intermediate_code(MASTER_PASSPHRASE, Some(pair), Some(&FIXED_OWNER_SALT_4)).unwrap();
        let minted = create_new_encrypted_wif(
            &intermediate,
            PublicKeyForm::Uncompressed,
            Some(&FIXED_SEED_24),
            Network::Testnet,
        )
        .unwrap();

        let confirmed = confirm_code(
            MASTER_PASSPHRASE,
            &minted.confirmation_code,
            Network::Testnet,
        )
        .expect("VAULT_FAULT: confirmación con lot/sequence");

        assert_eq!(confirmed.address, minted.address);
        assert_eq!(confirmed.public_key_form, PublicKeyForm::Uncompressed);
        assert_eq!(confirmed.lot_sequence, Some(pair));
    }

    #[test]
    fn certify_prefix_discipline_of_the_channel() {
        // Un sobre cifrado no es un código de confirmación.
        let minted = mint_without_lot_sequence();
        let verdict = confirm_code(MASTER_PASSPHRASE, &minted.encrypted_wif, Network::Mainnet);
        assert!(matches!(
            verdict,
            Err(CipherError::InvalidLength { context: "confirmation code", .. })
        ));
    }
}
