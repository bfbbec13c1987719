// [tests/mirror/libs/core/cipher_engine/non_ec_roundtrip.test.rs]
/*!
 * =================================================================
 * APARATO: NON-EC VAULT CERTIFIER (V3.3 - SOBERANO)
 * CLASIFICACIÓN: TRINITY EVIDENCE // ESTRATO L1-CIPHER
 * RESPONSABILIDAD: CERTIFICACIÓN DE IDA Y VUELTA DE LA RAMA NO-EC
 *                  CONTRA EL VECTOR CRUZADO PUBLICADO
 *
 * VISION HIPER-HOLÍSTICA:
 * 1. ISOMORPHIC PROOF: El WIF 5KN7... del vector cruzado se reconstruye
 *    bit-perfecto y atraviesa el ciclo cifrar/descifrar en ambas
 *    proyecciones.
 * 2. COMMITMENT AUDIT: Las dos proyecciones de la misma llave producen
 *    sobres distintos (el hash de dirección comprometido difiere).
 * 3. PANOPTIC REPORT: El veredicto se despacha al sumidero de
 *    telemetría del orquestador para el Dashboard de certificación.
 * =================================================================
 */

use qvault_core_cipher::prelude::*;
use reqwest::blocking::Client;
use serde_json::json;
use std::time::{Duration, Instant};

// --- VECTORES DE VERDAD (GOLDEN VECTORS) ---
const WITNESS_SCALAR_HEX: &str =
    "cbf4b9f70470856bb4f40f80b87edb90865997ffee6df315ab166d713af433a5";
const CROSS_IMPL_WIF: &str = "5KN7MzqK5wt2TP1fQCYyHBtDrXdJuXbUzm4A9rKAteGu3Qi5CVR";
const MASTER_PASSPHRASE: &str = "qtum123";

fn witness_private_key() -> PrivateKey {
    PrivateKey::from_bytes(&hex::decode(WITNESS_SCALAR_HEX).unwrap())
        .expect("VAULT_FAULT: testigo dentro del rango")
}

/**
 * Despacha el informe técnico de la auditoría del vault al Orquestador.
 */
fn dispatch_vault_integrity_report(
    verdict_label: &str,
    technical_forensic_log: String,
    detected_faults_count: u32,
) {
    let orchestrator_base_url = std::env::var("ORCHESTRATOR_URL")
        .unwrap_or_else(|_| "http://localhost:3000".into());
    let worker_authentication_token =
        std::env::var("WORKER_AUTH_TOKEN").unwrap_or_else(|_| "observer".into());

    let payload_artifact = json!({
        "testName": "NON_EC_VAULT_ROUNDTRIP_V3_3",
        "stratum": "L1_CIPHER",
        "verdict": verdict_label,
        "metrics": { "error_rate": detected_faults_count as f64 },
        "forensicLog": technical_forensic_log,
        "timestamp": chrono::Utc::now().to_rfc3339()
    });

    let network_communication_client = Client::builder()
        .timeout(Duration::from_secs(5))
        .build()
        .expect("INFRA_FAULT: Reporting engine failed.");

    let _ = network_communication_client
        .post(format!("{orchestrator_base_url}/api/v1/admin/qa/report"))
        .header("Authorization", format!("Bearer {worker_authentication_token}"))
        .json(&payload_artifact)
        .send();
}

#[cfg(test)]
mod tests {
    use super::*;

    /**
     * CERTIFICACIÓN: Ciclo completo de la rama no-EC en ambas proyecciones.
     */
    #[test]
    fn certify_non_ec_roundtrip_both_projections() {
        println!("\n📦 [INICIO]: Auditoría forense de la rama no-EC...");
        let start_suite_timestamp = Instant::now();
        let mut forensic_audit_log = String::new();
        let mut accumulated_integrity_faults = 0u32;

        // 1. FASE COMPRIMIDA (bandera 0xE0)
        println!("   🧪 Fase 1: Proyección comprimida en red principal...");
        let compressed_wif = private_key_to_wif(
            &witness_private_key(),
            WifFormat::WifCompressed,
            Network::Mainnet,
        );
        let compressed_envelope =
            bip38_encrypt(&compressed_wif, MASTER_PASSPHRASE, Network::Mainnet)
                .expect("VAULT_FAULT: cifrado comprimido");
        assert!(compressed_envelope.starts_with("6P"));
        assert_eq!(compressed_envelope.len(), 58);

        let compressed_opened =
            bip38_decrypt(&compressed_envelope, MASTER_PASSPHRASE, Network::Mainnet)
                .expect("VAULT_FAULT: descifrado comprimido");
        if compressed_opened.wif == compressed_wif
            && compressed_opened.wif_format == WifFormat::WifCompressed
        {
            forensic_audit_log.push_str("✅ PARITY: ciclo comprimido bit-perfect.\n");
        } else {
            accumulated_integrity_faults += 1;
            forensic_audit_log.push_str("❌ PARITY_FAULT: deriva en el ciclo comprimido.\n");
        }

        // 2. FASE NO COMPRIMIDA (bandera 0xC0)
        println!("   🧪 Fase 2: Proyección no comprimida en red principal...");
        let plain_wif =
            private_key_to_wif(&witness_private_key(), WifFormat::Wif, Network::Mainnet);
        let plain_envelope = bip38_encrypt(&plain_wif, MASTER_PASSPHRASE, Network::Mainnet)
            .expect("VAULT_FAULT: cifrado no comprimido");
        let plain_opened = bip38_decrypt(&plain_envelope, MASTER_PASSPHRASE, Network::Mainnet)
            .expect("VAULT_FAULT: descifrado no comprimido");

        if plain_opened.wif == plain_wif && plain_opened.wif_format == WifFormat::Wif {
            forensic_audit_log.push_str("✅ PARITY: ciclo no comprimido bit-perfect.\n");
        } else {
            accumulated_integrity_faults += 1;
            forensic_audit_log.push_str("❌ PARITY_FAULT: deriva en el ciclo no comprimido.\n");
        }

        // 3. AUDITORÍA DE COMPROMISO: proyecciones distintas, sobres distintos
        if compressed_envelope != plain_envelope {
            forensic_audit_log.push_str("✅ COMMITMENT: los sobres difieren por proyección.\n");
        } else {
            accumulated_integrity_faults += 1;
            forensic_audit_log.push_str("❌ COMMITMENT_FAULT: sobres idénticos.\n");
        }

        // 4. SENTENCIA Y REPORTE PANÓPTICO
        let final_audit_verdict = if accumulated_integrity_faults == 0 {
            "GOLD_MASTER"
        } else {
            "FAILED"
        };
        dispatch_vault_integrity_report(
            final_audit_verdict,
            forensic_audit_log,
            accumulated_integrity_faults,
        );
        println!(
            "\n🏁 [INFORME]: Auditoría no-EC finalizada en {:?}. Veredicto: {}",
            start_suite_timestamp.elapsed(),
            final_audit_verdict
        );
        assert_eq!(accumulated_integrity_faults, 0);
    }

    /**
     * CERTIFICACIÓN: Vector cruzado publicado (WIF no comprimido 5KN7...).
     */
    #[test]
    fn certify_cross_impl_vector_mainnet_exact_round_trip() {
        // El WIF del vector cruzado es la codificación mainnet del testigo.
        assert_eq!(
            private_key_to_wif(&witness_private_key(), WifFormat::Wif, Network::Mainnet),
            CROSS_IMPL_WIF
        );

        let envelope = bip38_encrypt(CROSS_IMPL_WIF, MASTER_PASSPHRASE, Network::Mainnet)
            .expect("VAULT_FAULT: cifrado del vector cruzado");
        let opened = bip38_decrypt(&envelope, MASTER_PASSPHRASE, Network::Mainnet)
            .expect("VAULT_FAULT: descifrado del vector cruzado");

        assert_eq!(opened.wif, CROSS_IMPL_WIF);
        assert_eq!(opened.wif_format, WifFormat::Wif);
        assert_eq!(opened.private_key, WITNESS_SCALAR_HEX);
    }

    /**
     * CERTIFICACIÓN: Vector cruzado bajo red de pruebas.
     *
     * El sobre no transporta la red: el argumento gobierna la dirección
     * comprometida y el byte de versión del WIF emitido. El escalar y la
     * variante se preservan bit-perfectos.
     */
    #[test]
    fn certify_cross_impl_vector_testnet_preserves_scalar_and_format() {
        let envelope = bip38_encrypt(CROSS_IMPL_WIF, MASTER_PASSPHRASE, Network::Testnet)
            .expect("VAULT_FAULT: cifrado testnet");
        let opened = bip38_decrypt(&envelope, MASTER_PASSPHRASE, Network::Testnet)
            .expect("VAULT_FAULT: descifrado testnet");

        assert_eq!(opened.private_key, WITNESS_SCALAR_HEX);
        assert_eq!(opened.wif_format, WifFormat::Wif);
        assert_eq!(get_wif_network(&opened.wif).unwrap(), Network::Testnet);
        assert_eq!(
            wif_to_private_key(&opened.wif).unwrap(),
            witness_private_key()
        );
    }
}
