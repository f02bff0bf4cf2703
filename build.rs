use shadow_rs::ShadowBuilder;

fn main() {
    // Embedded migrations are compiled in, so schema changes must trigger a rebuild
    println!("cargo:rerun-if-changed=migrations");

    ShadowBuilder::builder()
        .build()
        .expect("Failed to generate build metadata");
}
