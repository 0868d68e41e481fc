//! Studio header records

use std::io::{Read, Seek};

use glam::Vec3;
use serde::Serialize;

use crate::error::{Error, Result};
use crate::reader::BinReader;
use crate::session::ParseSession;
use super::{MdlVariant, StudioFlags, MAGIC, NAME_LENGTH, VENDOR_EXTENSION_TAG};

/// Location of a sub-table inside the model file.
///
/// `offset` is a byte offset from the start of the file, exposed exactly as
/// stored; relocation is the consumer's job.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SubTableRef {
    /// Number of entries in the sub-table.
    pub count: u32,
    /// Byte offset of the first entry.
    pub offset: u32,
}

impl SubTableRef {
    pub fn read<R: Read + Seek>(reader: &mut BinReader<R>) -> Result<Self> {
        Ok(Self {
            count: reader.read_u32()?,
            offset: reader.read_u32()?,
        })
    }
}

/// Decoded studio model header.
///
/// One struct covers versions 36 through 52; fields belonging to layouts
/// the decoded version does not have keep their zero/empty defaults. Scalar
/// pointers (`*_pointer` fields) are runtime scratch the compiler wrote
/// into the file and are only meaningful as raw values.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct MdlHeader {
    /// Magic tag, always IDST for files this library accepts.
    pub id: [u8; 4],
    /// Studio format version (36-52).
    pub version: u32,
    /// Checksum shared with the model's companion files.
    pub checksum: i32,
    /// Model name, e.g. `props_junk/watermelon01.mdl`.
    pub name: String,
    /// File size declared by the compiler. Verified against the stream
    /// length for versions 49+.
    pub file_size: u32,

    // Spatial bounds
    pub eye_position: Vec3,
    pub illumination_position: Vec3,
    pub hull_min: Vec3,
    pub hull_max: Vec3,
    pub view_bbox_min: Vec3,
    pub view_bbox_max: Vec3,

    /// Header flag word.
    pub flags: StudioFlags,

    // Sub-table directory, in stream order
    pub bones: SubTableRef,
    pub bone_controllers: SubTableRef,
    pub hitbox_sets: SubTableRef,
    pub local_animations: SubTableRef,
    pub local_sequences: SubTableRef,

    /// Demand-loaded sequence groups are indexed (version 36 only).
    pub sequences_indexed_flag: u32,
    /// Sequence group count (version 36 only).
    pub sequence_group_count: u32,
    /// Sequence group table offset (version 36 only).
    pub sequence_group_offset: i32,

    /// Activity table revision (versions 44+).
    pub activity_list_version: u32,
    /// Animation events are indexed (versions 44+).
    pub events_indexed: u32,

    pub textures: SubTableRef,
    pub texture_paths: SubTableRef,
    /// Number of material slots per skin family.
    pub skin_reference_count: u32,
    /// Number of skin families.
    pub skin_family_count: u32,
    /// Byte offset of the skin family table.
    pub skin_family_offset: u32,
    pub body_parts: SubTableRef,
    pub local_attachments: SubTableRef,

    /// Bone transition table (version 36 only).
    pub transitions: SubTableRef,

    /// Node count (versions 44+).
    pub local_node_count: u32,
    /// Node table offset (versions 44+).
    pub local_node_offset: u32,
    /// Node name table offset (versions 44+).
    pub local_node_name_offset: u32,

    pub flex_descs: SubTableRef,
    pub flex_controllers: SubTableRef,
    pub flex_rules: SubTableRef,
    pub ik_chains: SubTableRef,
    pub mouths: SubTableRef,
    pub local_pose_parameters: SubTableRef,

    /// Surface property name, stored out-of-line.
    pub surface_prop: String,

    /// Byte offset of the key-value text block.
    pub key_value_offset: u32,
    /// Size of the key-value text block.
    pub key_value_size: u32,
    pub local_ik_auto_play_locks: SubTableRef,

    /// Model mass in kilograms.
    pub mass: f32,
    /// Content flags, kept as the raw word.
    pub contents: u32,

    // Versions 44+ from here down
    pub include_models: SubTableRef,
    pub virtual_model_pointer: u32,
    /// Animation block file name (version 44 dereferences it inline).
    pub anim_block_name: String,
    /// Raw offset of the animation block file name (versions 49+).
    pub anim_block_name_offset: u32,
    pub anim_blocks: SubTableRef,
    pub anim_block_model_pointer: u32,
    /// Byte offset of the bone table sorted by name.
    pub bone_table_by_name_offset: u32,
    pub vertex_base_pointer: u32,
    pub index_base_pointer: u32,

    /// Constant directional light dot product for static props.
    pub directional_light_dot: i8,
    /// Preferred LOD when consistency between models is required.
    pub root_lod: i8,
    /// Number of allowed root LODs (versions 49+).
    pub allowed_root_lod_count: i8,
    /// Zero-frame animation cache offset.
    pub zero_frame_cache_offset: i32,

    pub flex_controller_ui: SubTableRef,
    /// Fixed-point scale for vertex animation, meaningful when
    /// [`StudioFlags::VERT_ANIM_FIXED_POINT_SCALE`] is set (versions 49+).
    pub vert_anim_fixed_point_scale: f32,
    /// Byte offset of the extension header.
    pub studio_header2_offset: u32,
    /// Source Maya scene file name, stored out-of-line (version 52 only).
    pub maya_filename: String,

    pub source_bone_transforms: SubTableRef,
    /// Attachment overriding `illumination_position`, if any.
    pub illum_position_attachment_index: u32,
    /// Maximum eye deflection angle in radians.
    pub max_eye_deflection: f32,
    /// Byte offset of the linear bone table.
    pub linear_bone_offset: u32,
    /// Byte offset of the model name string.
    pub name_offset: u32,

    /// Bone flex driver table (versions 48+).
    pub bone_flex_drivers: SubTableRef,

    /// Trailing scratch ints padding the header to its fixed size.
    pub reserved: Vec<i32>,
}

impl MdlHeader {
    /// Decode a studio header from the start of `reader`.
    ///
    /// The magic tag is validated with a non-consuming peek before any
    /// byte is committed, then the whole header is read in one sequential
    /// pass. The version is recorded into `session` as soon as it is known
    /// so companion decoders run with it in place.
    ///
    /// # Errors
    /// Fails with [`Error::InvalidMdlMagic`] when the stream is not a
    /// studio model, [`Error::UnsupportedMdlVersion`] for versions without
    /// a known layout, [`Error::FileSizeMismatch`] when a version 49+
    /// header disagrees with the stream length, and
    /// [`Error::TruncatedInput`] when the stream ends mid-field. No
    /// partial record is returned.
    pub fn read<R: Read + Seek>(
        reader: &mut BinReader<R>,
        session: &mut ParseSession,
    ) -> Result<Self> {
        let magic = reader.peek_fourcc()?;
        if magic != MAGIC {
            return Err(Error::InvalidMdlMagic(magic));
        }

        let id = reader.read_fourcc()?;
        let version = reader.read_u32()?;
        session.set_mdl_version(version);
        let variant = MdlVariant::from_version(version)?;
        let checksum = reader.read_i32()?;
        tracing::debug!("decoding studio header v{version} ({variant:?} layout)");

        let name = reader.read_fixed_ascii(NAME_LENGTH)?;
        let file_size = reader.read_u32()?;
        if variant.checks_file_size() && u64::from(file_size) != reader.len() {
            return Err(Error::FileSizeMismatch {
                declared: file_size,
                actual: reader.len(),
            });
        }

        let eye_position = reader.read_vec3()?;
        let illumination_position = reader.read_vec3()?;
        let hull_min = reader.read_vec3()?;
        let hull_max = reader.read_vec3()?;
        let view_bbox_min = reader.read_vec3()?;
        let view_bbox_max = reader.read_vec3()?;

        let flags = StudioFlags::from_bits_retain(reader.read_u32()?);

        let bones = SubTableRef::read(reader)?;
        let bone_controllers = SubTableRef::read(reader)?;
        let hitbox_sets = SubTableRef::read(reader)?;
        let local_animations = SubTableRef::read(reader)?;
        let local_sequences = SubTableRef::read(reader)?;

        // v36 keeps the legacy demand-loaded sequence group block here;
        // later versions replaced it with the activity list descriptor.
        let mut sequences_indexed_flag = 0;
        let mut sequence_group_count = 0;
        let mut sequence_group_offset = 0;
        let (activity_list_version, events_indexed) = if variant == MdlVariant::V36 {
            reader.skip(16)?;
            (sequences_indexed_flag, sequence_group_count) = reader.read_u32_pair()?;
            sequence_group_offset = reader.read_i32()?;
            (0, 0)
        } else {
            reader.read_u32_pair()?
        };

        let textures = SubTableRef::read(reader)?;
        let texture_paths = SubTableRef::read(reader)?;
        let skin_reference_count = reader.read_u32()?;
        let skin_family_count = reader.read_u32()?;
        let skin_family_offset = reader.read_u32()?;
        let body_parts = SubTableRef::read(reader)?;
        let local_attachments = SubTableRef::read(reader)?;

        let mut transitions = SubTableRef::default();
        let (local_node_count, local_node_offset, local_node_name_offset) =
            if variant == MdlVariant::V36 {
                transitions = SubTableRef::read(reader)?;
                (0, 0, 0)
            } else {
                (reader.read_u32()?, reader.read_u32()?, reader.read_u32()?)
            };

        let flex_descs = SubTableRef::read(reader)?;
        let flex_controllers = SubTableRef::read(reader)?;
        let flex_rules = SubTableRef::read(reader)?;
        let ik_chains = SubTableRef::read(reader)?;
        let mouths = SubTableRef::read(reader)?;
        let local_pose_parameters = SubTableRef::read(reader)?;

        let surface_prop = reader.read_offset_string(0)?;

        let (key_value_offset, key_value_size) = reader.read_u32_pair()?;
        let local_ik_auto_play_locks = SubTableRef::read(reader)?;
        let mass = reader.read_f32()?;
        let contents = reader.read_u32()?;

        if variant == MdlVariant::V36 {
            // v36 ends with a 9-int scratch tail
            let reserved = reader.read_i32_vec(9)?;
            return Ok(Self {
                id,
                version,
                checksum,
                name,
                file_size,
                eye_position,
                illumination_position,
                hull_min,
                hull_max,
                view_bbox_min,
                view_bbox_max,
                flags,
                bones,
                bone_controllers,
                hitbox_sets,
                local_animations,
                local_sequences,
                sequences_indexed_flag,
                sequence_group_count,
                sequence_group_offset,
                textures,
                texture_paths,
                skin_reference_count,
                skin_family_count,
                skin_family_offset,
                body_parts,
                local_attachments,
                transitions,
                flex_descs,
                flex_controllers,
                flex_rules,
                ik_chains,
                mouths,
                local_pose_parameters,
                surface_prop,
                key_value_offset,
                key_value_size,
                local_ik_auto_play_locks,
                mass,
                contents,
                reserved,
                ..Self::default()
            });
        }

        let include_models = SubTableRef::read(reader)?;
        let virtual_model_pointer = reader.read_u32()?;

        // v44 stores the anim block name like every other header string;
        // 49+ keep the raw offset and leave resolution to the consumer.
        let mut anim_block_name = String::new();
        let mut anim_block_name_offset = 0;
        if variant == MdlVariant::V44 {
            anim_block_name = reader.read_offset_string(0)?;
        } else {
            anim_block_name_offset = reader.read_u32()?;
        }

        let anim_blocks = SubTableRef::read(reader)?;
        let (anim_block_model_pointer, bone_table_by_name_offset) = reader.read_u32_pair()?;
        let (vertex_base_pointer, index_base_pointer) = reader.read_u32_pair()?;

        let directional_light_dot = reader.read_i8()?;
        let root_lod = reader.read_i8()?;
        let mut allowed_root_lod_count = 0;
        if variant == MdlVariant::V44 {
            reader.skip(2)?;
        } else {
            allowed_root_lod_count = reader.read_i8()?;
            reader.skip(1)?;
        }
        let zero_frame_cache_offset = reader.read_i32()?;

        if variant == MdlVariant::V44 {
            // Some v44-era files carry a 20-byte vendor extension here.
            // Probe without consuming; a mismatch must not move the cursor.
            let (_, probe) = reader.peek_u32_pair()?;
            if probe == VENDOR_EXTENSION_TAG {
                reader.skip(20)?;
            }
        }

        let flex_controller_ui = SubTableRef::read(reader)?;

        let mut vert_anim_fixed_point_scale = 0.0;
        let mut maya_filename = String::new();
        let studio_header2_offset;
        if variant == MdlVariant::V44 {
            reader.skip(16)?;
            studio_header2_offset = reader.read_u32()?;
            reader.skip(4)?;
            reader.skip(36)?;
        } else {
            vert_anim_fixed_point_scale = reader.read_f32()?;
            reader.skip(4)?;
            studio_header2_offset = reader.read_u32()?;
            if variant == MdlVariant::V52 {
                maya_filename = reader.read_offset_string(0)?;
            } else {
                reader.skip(4)?;
            }
        }

        let source_bone_transforms = SubTableRef::read(reader)?;
        let illum_position_attachment_index = reader.read_u32()?;
        let max_eye_deflection = reader.read_f32()?;
        let (linear_bone_offset, name_offset) = reader.read_u32_pair()?;

        let mut bone_flex_drivers = SubTableRef::default();
        if version > 47 {
            bone_flex_drivers = SubTableRef::read(reader)?;
        }

        let reserved_len = if variant == MdlVariant::V44 { 58 } else { 56 };
        let reserved = reader.read_i32_vec(reserved_len)?;

        Ok(Self {
            id,
            version,
            checksum,
            name,
            file_size,
            eye_position,
            illumination_position,
            hull_min,
            hull_max,
            view_bbox_min,
            view_bbox_max,
            flags,
            bones,
            bone_controllers,
            hitbox_sets,
            local_animations,
            local_sequences,
            sequences_indexed_flag,
            sequence_group_count,
            sequence_group_offset,
            activity_list_version,
            events_indexed,
            textures,
            texture_paths,
            skin_reference_count,
            skin_family_count,
            skin_family_offset,
            body_parts,
            local_attachments,
            transitions,
            local_node_count,
            local_node_offset,
            local_node_name_offset,
            flex_descs,
            flex_controllers,
            flex_rules,
            ik_chains,
            mouths,
            local_pose_parameters,
            surface_prop,
            key_value_offset,
            key_value_size,
            local_ik_auto_play_locks,
            mass,
            contents,
            include_models,
            virtual_model_pointer,
            anim_block_name,
            anim_block_name_offset,
            anim_blocks,
            anim_block_model_pointer,
            bone_table_by_name_offset,
            vertex_base_pointer,
            index_base_pointer,
            directional_light_dot,
            root_lod,
            allowed_root_lod_count,
            zero_frame_cache_offset,
            flex_controller_ui,
            vert_anim_fixed_point_scale,
            studio_header2_offset,
            maya_filename,
            source_bone_transforms,
            illum_position_attachment_index,
            max_eye_deflection,
            linear_bone_offset,
            name_offset,
            bone_flex_drivers,
            reserved,
        })
    }

    /// The header layout family this record's version belongs to.
    ///
    /// # Errors
    /// Fails only if the record holds a version this library cannot have
    /// produced.
    pub fn variant(&self) -> Result<MdlVariant> {
        MdlVariant::from_version(self.version)
    }
}
