//! CLI command for inspecting a single model file
//!
//! Decodes one header and prints its fields, either as aligned text or as
//! JSON. VTX files are picked out by extension; everything else is decoded
//! as MDL, which reports a magic mismatch for foreign files.

use std::path::Path;

use crate::formats::mdl::{self, MdlHeader, SubTableRef};
use crate::formats::vtx::{self, VtxHeader};
use crate::session::ParseSession;

pub fn execute(path: &Path, json: bool) -> anyhow::Result<()> {
    let data = std::fs::read(path)?;
    let mut session = ParseSession::new();

    // A .vtx file carrying the studio magic is a misnamed MDL
    let treat_as_vtx = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("vtx"))
        && !mdl::is_mdl_bytes(&data);

    if treat_as_vtx {
        let header = vtx::parse_vtx_bytes_with_session(&data, &mut session)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&header)?);
        } else {
            print_vtx(path, &header);
        }
    } else {
        let header = mdl::parse_mdl_bytes_with_session(&data, &mut session)?;
        if json {
            println!("{}", serde_json::to_string_pretty(&header)?);
        } else {
            print_mdl(path, &header);
        }
    }

    Ok(())
}

fn print_mdl(path: &Path, header: &MdlHeader) {
    println!("Inspecting model file: {}", path.display());
    println!();

    println!("MDL Header Information");
    println!("======================");
    println!("Version:      {}", header.version);
    println!("Checksum:     0x{:08X}", header.checksum);
    println!("Name:         {}", header.name);
    println!("File size:    {} bytes", header.file_size);
    println!("Flags:        {}", format_flags(header));
    println!("Surface prop: {}", header.surface_prop);
    println!("Mass:         {:.1}", header.mass);
    if !header.anim_block_name.is_empty() {
        println!("Anim blocks:  {}", header.anim_block_name);
    }
    if !header.maya_filename.is_empty() {
        println!("Maya file:    {}", header.maya_filename);
    }
    println!();

    println!("Hull: ({:.1}, {:.1}, {:.1}) to ({:.1}, {:.1}, {:.1})",
        header.hull_min.x, header.hull_min.y, header.hull_min.z,
        header.hull_max.x, header.hull_max.y, header.hull_max.z,
    );
    println!();

    println!("Tables:");
    println!("-------");
    print_table("bones", &header.bones);
    print_table("sequences", &header.local_sequences);
    print_table("animations", &header.local_animations);
    print_table("textures", &header.textures);
    print_table("body parts", &header.body_parts);
    print_table("attachments", &header.local_attachments);
    print_table("flex descs", &header.flex_descs);
    print_table("ik chains", &header.ik_chains);
}

fn print_vtx(path: &Path, header: &VtxHeader) {
    println!("Inspecting model file: {}", path.display());
    println!();

    println!("VTX Header Information");
    println!("======================");
    println!("Version:      {}", header.version);
    println!("Checksum:     0x{:08X}", header.checksum);
    println!("Vertex cache: {} bytes", header.vertex_cache_size);
    println!(
        "Max bones:    {} per strip, {} per tri, {} per vertex",
        header.max_bones_per_strip, header.max_bones_per_tri, header.max_bones_per_vertex
    );
    println!("LOD count:    {}", header.lod_count);
    println!(
        "Body parts:   {} @ 0x{:08X}",
        header.body_part_count, header.body_part_offset
    );
}

fn print_table(name: &str, table: &SubTableRef) {
    println!("  {:<12} {:>6} @ 0x{:08X}", name, table.count, table.offset);
}

fn format_flags(header: &MdlHeader) -> String {
    let names: Vec<&str> = header.flags.iter_names().map(|(name, _)| name).collect();
    if names.is_empty() {
        format!("0x{:08X}", header.flags.bits())
    } else {
        format!("0x{:08X} ({})", header.flags.bits(), names.join(" | "))
    }
}
