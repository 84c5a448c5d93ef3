// SPDX short identifier: Unlicense

use confidential_values::config::VerifierConfig;

fn main() {
    //The verifier keeps G, H, H_v, n and -2^i * H as immutables.
    //Derive them once here and pass the encoded tuple to its constructor.
    let config = VerifierConfig::current().to_hex()
        .expect("Real software should have proper error handling.");
    println!("Constructor config: {config}");
}
