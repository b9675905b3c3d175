/// The quiet stagehand who keeps the bundled catalog in step with the build.
///
/// typu-core carries a snapshot of the webfonts catalog inside the crate,
/// and this script makes sure Cargo notices when that snapshot is refreshed.
/// Think of it as the person backstage who swaps the props between scenes
/// without anyone in the audience noticing.

fn main() {
    // Rebuild when the embedded snapshot (or this script) changes
    println!("cargo:rerun-if-changed=build.rs");
    println!("cargo:rerun-if-changed=data/webfonts.json");
}
