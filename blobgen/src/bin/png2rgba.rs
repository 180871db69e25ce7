//! `png2rgba <namespace> <artwork-folder>`: embeds every PNG below the folder.

fn main() -> anyhow::Result<()> {
    blobgen::main(blobgen_assets::Kind::Images)
}
