use anyhow::Result;
use pretty_assertions::assert_eq;
use wasm_gen::{
    encoders, Encode, ImportDescriptor, Index, Limits, ModuleExport, ModuleExportDescr,
    ModuleImport, SectionMetadata,
};
use wasmparser::BinaryReader;

fn import(module: &str, name: &str, descr: ImportDescriptor) -> ModuleImport {
    ModuleImport {
        module: module.to_string(),
        name: name.to_string(),
        descr,
    }
}

fn export(name: &str, kind: &str, id: u32) -> ModuleExport {
    ModuleExport {
        name: name.to_string(),
        descr: ModuleExportDescr {
            kind: kind.to_string(),
            id: Index::Num(id),
        },
    }
}

/// Frames `entries` as a section the way a module assembler would.
fn section(name: &str, entries: &[Vec<u8>]) -> Result<Vec<u8>> {
    let count = u32::try_from(entries.len())?;
    let payload = entries.concat();
    let size = encoders::u32(count)?.len() + payload.len();
    let mut bytes = SectionMetadata {
        section: name.to_string(),
        size: u32::try_from(size)?,
        vector_of_size: count,
    }
    .to_bytes()?;
    bytes.extend(payload);
    Ok(bytes)
}

#[test]
fn assembled_module_validates() -> Result<()> {
    let _ = env_logger::try_init();

    let imports = [
        import(
            "env",
            "mem",
            ImportDescriptor::Memory {
                limits: Limits {
                    min: 1,
                    max: Some(2),
                },
            },
        )
        .to_bytes()?,
        import(
            "env",
            "counter",
            ImportDescriptor::GlobalType {
                valtype: "i32".to_string(),
                mutability: "const".to_string(),
            },
        )
        .to_bytes()?,
    ];
    let exports = [
        export("memory", "Mem", 0).to_bytes()?,
        export("counter", "Global", 0).to_bytes()?,
    ];

    let mut wasm = Vec::new();
    wasm.extend(encoders::header());
    wasm.extend(encoders::version(1));
    wasm.extend(section("import", &imports)?);
    wasm.extend(section("export", &exports)?);

    wasmparser::validate(&wasm)?;
    Ok(())
}

#[test]
fn import_entry_reads_back() -> Result<()> {
    let bytes = import(
        "environment",
        "ünïcode",
        ImportDescriptor::Memory {
            limits: Limits {
                min: 300,
                max: None,
            },
        },
    )
    .to_bytes()?;

    let mut reader = BinaryReader::new(&bytes, 0);
    assert_eq!(reader.read_string()?, "environment");
    assert_eq!(reader.read_string()?, "ünïcode");
    assert_eq!(reader.read_u8()?, 0x02);
    assert_eq!(reader.read_u8()?, 0x00);
    assert_eq!(reader.read_var_u32()?, 300);
    assert!(reader.eof());
    Ok(())
}

#[test]
fn long_vectors_have_multi_byte_counts() -> Result<()> {
    for len in [0_usize, 1, 127, 128, 129, 16_384, 70_000] {
        let elements = vec![0x55; len];
        let bytes = encoders::vec(&elements)?;

        let mut reader = BinaryReader::new(&bytes, 0);
        assert_eq!(reader.read_var_u32()? as usize, len);
        let header = bytes.len() - len;
        assert_eq!(&bytes[header..], &elements[..]);
    }
    Ok(())
}

#[test]
fn long_names_read_back() -> Result<()> {
    let name = "x".repeat(200);
    let bytes = export(&name, "Func", 1_000_000).to_bytes()?;

    let mut reader = BinaryReader::new(&bytes, 0);
    assert_eq!(reader.read_string()?, name);
    assert_eq!(reader.read_u8()?, 0x00);
    assert_eq!(reader.read_var_u32()?, 1_000_000);
    assert!(reader.eof());
    Ok(())
}

#[test]
fn u32_matches_reader() -> Result<()> {
    for n in [0, 1, 127, 128, 255, 16_383, 16_384, 1 << 21, 1 << 28, u32::MAX] {
        let bytes = encoders::u32(n)?;
        let mut reader = BinaryReader::new(&bytes, 0);
        assert_eq!(reader.read_var_u32()?, n);
        assert!(reader.eof());
    }
    Ok(())
}
