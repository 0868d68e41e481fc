//! Shared byte fixtures for header decoding tests
//!
//! Builders write each layout linearly with distinctive values so a
//! misaligned decoder lands on padding bytes (0xAA/0xBB/0xCC/0xDD) and
//! fails loudly. Total lengths are asserted against the known size of
//! each layout.

#![allow(dead_code)]

/// Sentinel announcing the optional 20-byte vendor block in v44-era files.
pub const VENDOR_TAG: u32 = 1_279_345_491;

/// Checksum shared by the MDL and VTX fixtures, as companion files are.
pub const FIXTURE_CHECKSUM: i32 = 0x5EED_CAFE;

pub const FIXTURE_NAME: &str = "props/crate01.mdl";
pub const FIXTURE_SURFACE_PROP: &str = "flesh";
pub const FIXTURE_ANIM_BLOCK_NAME: &str = "crate01.ani";
pub const FIXTURE_MAYA_FILENAME: &str = "crate01.ma";

pub fn put_u16(buf: &mut Vec<u8>, v: u16) {
    buf.extend_from_slice(&v.to_le_bytes());
}

pub fn put_u32(buf: &mut Vec<u8>, v: u32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

pub fn put_i32(buf: &mut Vec<u8>, v: i32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

pub fn put_f32(buf: &mut Vec<u8>, v: f32) {
    buf.extend_from_slice(&v.to_le_bytes());
}

pub fn put_vec3(buf: &mut Vec<u8>, x: f32, y: f32, z: f32) {
    put_f32(buf, x);
    put_f32(buf, y);
    put_f32(buf, z);
}

pub fn put_table(buf: &mut Vec<u8>, count: u32, offset: u32) {
    put_u32(buf, count);
    put_u32(buf, offset);
}

/// Write a NUL-padded fixed-width name field.
pub fn put_name(buf: &mut Vec<u8>, name: &str) {
    assert!(name.len() < 64);
    let start = buf.len();
    buf.extend_from_slice(name.as_bytes());
    buf.resize(start + 64, 0);
}

fn put_fill(buf: &mut Vec<u8>, n: usize, byte: u8) {
    buf.extend_from_slice(&vec![byte; n]);
}

fn put_cstr(buf: &mut Vec<u8>, s: &str) {
    buf.extend_from_slice(s.as_bytes());
    buf.push(0);
}

/// Fixed-layout length for a version, before appended strings.
pub fn fixed_len(version: u32, vendor_block: bool) -> u32 {
    let base = match version {
        36 => 388,
        44..=47 => 708,
        48 => 716,
        49..=52 => 664,
        other => panic!("no fixture layout for version {other}"),
    };
    if vendor_block {
        assert!((44..=48).contains(&version));
        base + 20
    } else {
        base
    }
}

/// Build a complete MDL fixture for `version`.
pub fn mdl_fixture(version: u32) -> Vec<u8> {
    build_mdl(version, false)
}

/// Build a v44-era MDL fixture carrying the 20-byte vendor block.
pub fn mdl_fixture_with_extension(version: u32) -> Vec<u8> {
    build_mdl(version, true)
}

fn build_mdl(version: u32, vendor_block: bool) -> Vec<u8> {
    let fixed = fixed_len(version, vendor_block);
    let surface_offset = fixed;
    let second_string_offset = fixed + (FIXTURE_SURFACE_PROP.len() as u32 + 1);

    let total = fixed
        + (FIXTURE_SURFACE_PROP.len() as u32 + 1)
        + match version {
            44..=48 => FIXTURE_ANIM_BLOCK_NAME.len() as u32 + 1,
            52 => FIXTURE_MAYA_FILENAME.len() as u32 + 1,
            _ => 0,
        };

    // Only 49+ layouts declare their true stream length
    let file_size = if version >= 49 { total } else { 0x0004_0000 };

    let mut buf = Vec::with_capacity(total as usize);
    buf.extend_from_slice(b"IDST");
    put_u32(&mut buf, version);
    put_i32(&mut buf, FIXTURE_CHECKSUM);
    put_name(&mut buf, FIXTURE_NAME);
    put_u32(&mut buf, file_size);

    put_vec3(&mut buf, 0.0, 0.0, 64.0); // eye
    put_vec3(&mut buf, 0.0, 0.0, 32.0); // illumination
    put_vec3(&mut buf, -16.0, -16.0, 0.0); // hull min
    put_vec3(&mut buf, 16.0, 16.0, 72.0); // hull max
    put_vec3(&mut buf, -18.0, -18.0, -2.0); // view bbox min
    put_vec3(&mut buf, 18.0, 18.0, 74.0); // view bbox max

    put_u32(&mut buf, 0x12); // USES_ENV_CUBEMAP | STATIC_PROP

    put_table(&mut buf, 59, 0x0800); // bones
    put_table(&mut buf, 0, 0); // bone controllers
    put_table(&mut buf, 1, 0x2000); // hitbox sets
    put_table(&mut buf, 12, 0x2400); // local animations
    put_table(&mut buf, 20, 0x2800); // local sequences

    if version == 36 {
        put_fill(&mut buf, 16, 0xDD);
        put_u32(&mut buf, 1); // sequences indexed
        put_u32(&mut buf, 2); // sequence group count
        put_i32(&mut buf, 0x3000); // sequence group offset
    } else {
        put_u32(&mut buf, 1); // activity list version
        put_u32(&mut buf, 1); // events indexed
    }

    put_table(&mut buf, 3, 0x3400); // textures
    put_table(&mut buf, 1, 0x3480); // texture paths
    put_u32(&mut buf, 3); // skin reference count
    put_u32(&mut buf, 1); // skin family count
    put_u32(&mut buf, 0x3500); // skin family offset
    put_table(&mut buf, 1, 0x3600); // body parts
    put_table(&mut buf, 2, 0x3700); // local attachments

    if version == 36 {
        put_table(&mut buf, 4, 0x3800); // transitions
    } else {
        put_u32(&mut buf, 0); // local node count
        put_u32(&mut buf, 0x3800); // local node offset
        put_u32(&mut buf, 0x3840); // local node name offset
    }

    put_table(&mut buf, 8, 0x3900); // flex descs
    put_table(&mut buf, 4, 0x3A00); // flex controllers
    put_table(&mut buf, 16, 0x3B00); // flex rules
    put_table(&mut buf, 2, 0x3C00); // ik chains
    put_table(&mut buf, 1, 0x3D00); // mouths
    put_table(&mut buf, 3, 0x3E00); // pose parameters

    put_u32(&mut buf, surface_offset);

    put_u32(&mut buf, 0x3F00); // key value offset
    put_u32(&mut buf, 128); // key value size
    put_table(&mut buf, 0, 0); // ik autoplay locks
    put_f32(&mut buf, 52.5); // mass
    put_u32(&mut buf, 1); // contents

    if version == 36 {
        put_fill(&mut buf, 9 * 4, 0x00); // reserved tail
        append_strings(&mut buf, version, fixed);
        assert_eq!(buf.len() as u32, total);
        return buf;
    }

    put_table(&mut buf, 1, 0x4000); // include models
    put_u32(&mut buf, 0); // virtual model pointer
    if version <= 48 {
        put_u32(&mut buf, second_string_offset); // anim block name
    } else {
        put_u32(&mut buf, 0x4100); // anim block name offset
    }
    put_table(&mut buf, 2, 0x4200); // anim blocks
    put_u32(&mut buf, 0); // anim block model pointer
    put_u32(&mut buf, 0x4300); // bone table by name offset
    put_u32(&mut buf, 0); // vertex base pointer
    put_u32(&mut buf, 0); // index base pointer

    buf.push(3); // directional light dot
    buf.push(0); // root lod
    if version <= 48 {
        put_fill(&mut buf, 2, 0xAA);
    } else {
        buf.push(2); // allowed root lod count
        put_fill(&mut buf, 1, 0xAA);
    }
    put_i32(&mut buf, 0x4400); // zero frame cache offset

    if vendor_block {
        buf.extend_from_slice(&[0xDE, 0xAD, 0xBE, 0xEF]);
        put_u32(&mut buf, VENDOR_TAG);
        put_fill(&mut buf, 12, 0xCC);
    }

    put_table(&mut buf, 6, 0x4500); // flex controller ui

    if version <= 48 {
        put_fill(&mut buf, 16, 0xBB);
        put_u32(&mut buf, 0x4600); // studio header2 offset
        put_fill(&mut buf, 4, 0xBB);
        put_fill(&mut buf, 36, 0xBB);
    } else {
        put_f32(&mut buf, 1.0); // vert anim fixed point scale
        put_fill(&mut buf, 4, 0xBB);
        put_u32(&mut buf, 0x4600); // studio header2 offset
        if version == 52 {
            put_u32(&mut buf, second_string_offset); // maya filename
        } else {
            put_fill(&mut buf, 4, 0xBB);
        }
    }

    put_table(&mut buf, 2, 0x4700); // source bone transforms
    put_u32(&mut buf, 0); // illum position attachment
    put_f32(&mut buf, 0.866); // max eye deflection
    put_u32(&mut buf, 0x4800); // linear bone offset
    put_u32(&mut buf, 12); // name offset

    if version > 47 {
        put_table(&mut buf, 3, 0x4900); // bone flex drivers
    }

    let reserved_len = if version <= 48 { 58 } else { 56 };
    put_fill(&mut buf, reserved_len * 4, 0x00);

    assert_eq!(buf.len() as u32, fixed);
    append_strings(&mut buf, version, fixed);
    assert_eq!(buf.len() as u32, total);
    buf
}

fn append_strings(buf: &mut Vec<u8>, version: u32, fixed: u32) {
    assert_eq!(buf.len() as u32, fixed);
    put_cstr(buf, FIXTURE_SURFACE_PROP);
    match version {
        44..=48 => put_cstr(buf, FIXTURE_ANIM_BLOCK_NAME),
        52 => put_cstr(buf, FIXTURE_MAYA_FILENAME),
        _ => {}
    }
}

/// Build a 36-byte VTX fixture for `version`.
pub fn vtx_fixture(version: i32) -> Vec<u8> {
    let mut buf = Vec::with_capacity(36);
    put_i32(&mut buf, version);
    put_i32(&mut buf, 24); // vertex cache size
    put_u16(&mut buf, 53); // max bones per strip
    put_u16(&mut buf, 9); // max bones per tri
    put_i32(&mut buf, 3); // max bones per vertex
    put_i32(&mut buf, FIXTURE_CHECKSUM);
    put_i32(&mut buf, 1); // lod count
    put_i32(&mut buf, 0); // material replacement list offset
    put_i32(&mut buf, 1); // body part count
    put_i32(&mut buf, 36); // body part offset
    assert_eq!(buf.len(), 36);
    buf
}
