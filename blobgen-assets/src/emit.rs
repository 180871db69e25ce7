use std::io::{self, Write};

use crate::asset::EmbeddedAsset;

const BANNER: &str = "/* (Auto-generated binary data file). */";

/// Number of groups (pixels or single bytes) written per line.
pub const GROUPS_PER_LINE: usize = 20;

/// Writes the declarations (`header`) and definitions (`source`) for a fixed
/// number of assets. Call `begin`, then `asset` once per asset, then `finish`.
pub struct Emitter<H: Write, S: Write> {
    namespace: String,
    header: H,
    source: S,
    index: usize,
    total: usize,
}

impl<H: Write, S: Write> Emitter<H, S> {
    pub fn begin(namespace: &str, total: usize, mut header: H, mut source: S) -> io::Result<Self> {
        let guard = guard_name(namespace);
        writeln!(header, "{}", BANNER)?;
        writeln!(header)?;
        writeln!(header, "#ifndef {}", guard)?;
        writeln!(header, "#define {}", guard)?;
        writeln!(header)?;
        writeln!(header, "namespace {}", namespace)?;
        writeln!(header, "{{")?;

        writeln!(source, "{}", BANNER)?;
        writeln!(source)?;
        writeln!(source, "#include \"{}.hpp\"", namespace)?;
        writeln!(source)?;

        Ok(Emitter {
            namespace: namespace.to_string(),
            header,
            source,
            index: 0,
            total,
        })
    }

    pub fn asset(&mut self, asset: &EmbeddedAsset) -> io::Result<()> {
        self.index += 1;
        let name = &asset.name;
        let last = self.index == self.total;

        writeln!(self.header, "    extern const char* {}Data;", name)?;
        writeln!(self.header, "    const unsigned int {}DataSize = {};", name, asset.size())?;
        if let Some(dimensions) = asset.dimensions {
            writeln!(self.header, "    const unsigned int {}Width    = {};", name, dimensions.width)?;
            writeln!(self.header, "    const unsigned int {}Height   = {};", name, dimensions.height)?;
        }
        if !last {
            writeln!(self.header)?;
        }

        let temp = format!("temp_{}_{}", name, self.index);
        writeln!(self.source, "static const unsigned char {}[] = {{", temp)?;
        write_array(&mut self.source, &asset.data, asset.group)?;
        writeln!(self.source, "}};")?;
        writeln!(
            self.source,
            "const char* {}::{}Data = (const char*){};",
            self.namespace, name, temp
        )?;
        if !last {
            writeln!(self.source)?;
        }
        Ok(())
    }

    pub fn finish(mut self) -> io::Result<(H, S)> {
        debug_assert_eq!(self.index, self.total);
        writeln!(self.header, "}}")?;
        writeln!(self.header)?;
        writeln!(self.header, "#endif // {}", guard_name(&self.namespace))?;
        writeln!(self.header)?;
        writeln!(self.source)?;
        self.header.flush()?;
        self.source.flush()?;
        Ok((self.header, self.source))
    }
}

fn guard_name(namespace: &str) -> String {
    format!("BINARY_{}_HPP", namespace.to_uppercase())
}

/// Writes the body of a byte array literal: every value as a 3-wide decimal
/// followed by a comma, `GROUPS_PER_LINE` groups of `group` bytes per line.
pub fn write_array<W: Write>(out: &mut W, data: &[u8], group: usize) -> io::Result<()> {
    out.write_all(b" ")?;
    let mut column = 0;
    for chunk in data.chunks(group.max(1)) {
        for value in chunk {
            write!(out, " {:3},", value)?;
        }
        column += 1;
        if column == GROUPS_PER_LINE {
            out.write_all(b"\n ")?;
            column = 0;
        }
    }
    Ok(())
}
