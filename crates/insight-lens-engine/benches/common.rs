// Benchmark helper functions - Rust's dead code analysis doesn't understand
// that these are used by benchmark files in the same directory
// See: https://users.rust-lang.org/t/cargo-rustc-benches-awarnings/110111/2
#[allow(dead_code)]
pub fn generate_answer(sections: usize) -> String {
    let mut content = String::from(
        "Based on the customer data, I found that approximately **847 customers** are at high churn risk.\n\n",
    );

    for section in 0..sections {
        content.push_str(&format!("**Finding {section}:**\n\n"));
        content.push_str(
            "**Geographic Concentration**: Delhi and Mumbai account for 62% of high-risk customers. \
             This suggests **region-specific** issues.\n\n",
        );
        for item in 1..=3 {
            content.push_str(&format!(
                "{item}. **Action {item}**: Launch a targeted campaign to the 380 customers with billing complaints.\n\n"
            ));
        }
    }

    content.push_str("Would you like me to drill into any of these segments?");
    content
}
