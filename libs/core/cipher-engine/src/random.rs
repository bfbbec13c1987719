// [libs/core/cipher-engine/src/random.rs]
// =================================================================
// APARATO: ENTROPY SOURCE
// RESPONSABILIDAD: ADQUISICIÓN DE BYTES UNIFORMES DEL CSPRNG DEL SISTEMA
// =================================================================

use rand::rngs::OsRng;
use rand::RngCore;

/// Adquiere `N` bytes criptográficamente uniformes del sistema.
///
/// Las operaciones que consumen sal de propietario o semilla aceptan
/// material determinista del llamador; esta fuente sólo cubre el caso
/// por omisión.
#[must_use]
pub fn random_bytes<const N: usize>() -> [u8; N] {
    let mut output = [0u8; N];
    OsRng.fill_bytes(&mut output);
    output
}
