/// Text payload for entities rendered as text instead of a texture.
///
/// Mutually exclusive with image data: a render record carries either a
/// texture key with image dimensions, or a text payload.
#[derive(Debug, Clone, PartialEq)]
pub struct TextData {
    pub content: String,
    pub font_size: i32,
}

/// Drawable state for one entity.
///
/// Decoded images and GPU textures live in the
/// [`TextureStore`](crate::resources::texturestore::TextureStore) keyed by
/// string; this record carries the key of the frame to draw plus the image
/// dimensions the collide system derives its AABB from. The asset loader
/// populates it before the first frame; the animate system is the only
/// mutator afterwards (frame swaps).
#[derive(Debug, Clone, PartialEq, Default)]
pub struct RenderData {
    /// Resolved path of the current image, doubling as the texture key.
    pub path: String,
    /// Key of the current texture in the texture store.
    pub tex_key: String,
    /// Decoded image width in pixels.
    pub width: f32,
    /// Decoded image height in pixels.
    pub height: f32,
    /// Present for text-only entities.
    pub text: Option<TextData>,
}

impl RenderData {
    pub fn image(path: impl Into<String>, width: f32, height: f32) -> Self {
        let path = path.into();
        RenderData {
            tex_key: path.clone(),
            path,
            width,
            height,
            text: None,
        }
    }

    pub fn label(content: impl Into<String>, font_size: i32) -> Self {
        RenderData {
            text: Some(TextData {
                content: content.into(),
                font_size,
            }),
            ..Default::default()
        }
    }

    pub fn is_text(&self) -> bool {
        self.text.is_some()
    }
}
