//! `res2c <namespace> <resource-folder>`: embeds every file below the folder.

fn main() -> anyhow::Result<()> {
    blobgen::main(blobgen_assets::Kind::Resources)
}
