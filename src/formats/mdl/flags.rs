//! Studio header flag word

use serde::Serialize;

bitflags::bitflags! {
    /// Flags from the studio header's 32-bit flag word.
    ///
    /// Decoded with [`StudioFlags::from_bits_retain`] so bits without a
    /// name here survive a decode unchanged; newer engine branches define
    /// more bits than this list.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct StudioFlags: u32 {
        /// Hitboxes were generated by the compiler, not authored.
        const AUTOGENERATED_HITBOX = 1 << 0;
        /// At least one material uses an environment cubemap.
        const USES_ENV_CUBEMAP = 1 << 1;
        /// Forced fully opaque regardless of material settings.
        const FORCE_OPAQUE = 1 << 2;
        /// Translucent materials render in two passes.
        const TRANSLUCENT_TWOPASS = 1 << 3;
        /// Compiled as a static prop.
        const STATIC_PROP = 1 << 4;
        /// At least one material samples the framebuffer.
        const USES_FB_TEXTURE = 1 << 5;
        /// Model ships a separate shadow LOD.
        const HASSHADOWLOD = 1 << 6;
        /// At least one material uses bump mapping.
        const USES_BUMPMAPPING = 1 << 7;
        /// Shadow LOD uses its own materials instead of the render ones.
        const USE_SHADOWLOD_MATERIALS = 1 << 8;
        /// Retired by the engine; still present in old files.
        const OBSOLETE = 1 << 9;
        const UNUSED = 1 << 10;
        /// Never fade this model out by distance.
        const NO_FORCED_FADE = 1 << 11;
        /// Sequences must crossfade phonemes when transitioning.
        const FORCE_PHONEME_CROSSFADE = 1 << 12;
        /// Lighting uses a constant directional dot product.
        const CONSTANT_DIRECTIONAL_LIGHT_DOT = 1 << 13;
        /// Flex data was converted to the post-v37 on-disk form.
        const FLEXES_CONVERTED = 1 << 14;
        /// Compiled with the preview-mode toolchain.
        const BUILT_IN_PREVIEW_MODE = 1 << 15;
        /// Ambient boost requested for this model's lighting.
        const AMBIENT_BOOST = 1 << 16;
        /// Model never casts shadows.
        const DO_NOT_CAST_SHADOWS = 1 << 17;
        /// Model casts texture-based shadows (RTT shadows).
        const CAST_TEXTURE_SHADOWS = 1 << 18;
        /// Geometry carries subdivision surface data.
        const SUBDIVISION_SURFACE = 1 << 19;
        /// Vertex animations use a fixed-point scale factor.
        const VERT_ANIM_FIXED_POINT_SCALE = 1 << 21;
    }
}

// Serialize as the raw flag word so unknown bits survive a JSON round trip.
impl Serialize for StudioFlags {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.bits().serialize(serializer)
    }
}
