use anyhow::{Context, Result};

use crate::coords::Viewport;
use crate::render::{
    Assets, Blend, Image, Pattern, Program, ProgramKind, RenderCtx, RenderTarget, Texture,
};

use super::{SceneConfig, SceneState, ShadingMode};

/// The initialized scene: GPU programs, meshes and textures plus the
/// [`SceneState`] they draw.
///
/// Creating a `Scene` is the Uninitialized → Initialized transition and
/// [`Scene::release`] is the terminal one; it consumes the value, so the
/// scene cannot be drawn after release.
pub struct Scene {
    config: SceneConfig,
    state: SceneState,
    flat: Program,
    textured: Program,
    assets: Assets,
}

impl Scene {
    /// Builds both programs, both generated textures and the shape meshes,
    /// and lays the sprites out for `width` x `height`.
    ///
    /// An error means a GPU object could not be created; the session cannot
    /// continue.
    pub fn init(ctx: &RenderCtx<'_>, width: u32, height: u32, config: SceneConfig) -> Result<Self> {
        let viewport = Viewport::from_physical(width, height);
        anyhow::ensure!(viewport.is_valid(), "scene viewport is empty ({width}x{height})");

        let flat = Program::new(ctx, ProgramKind::Flat).context("failed to create flat program")?;
        let textured = Program::new(ctx, ProgramKind::Texture2d)
            .context("failed to create texture program")?;

        let mut assets = Assets::new(ctx);
        let [coarse, fine] = Pattern::ALL.map(|pattern| {
            let image = Image::generate(pattern);
            assets.add_texture(Texture::upload(ctx, &image, pattern.label()))
        });

        let mut state = SceneState::new(viewport, config.spin_rate);
        state.assign_textures(fine, coarse);

        log::info!("scene initialized at {width}x{height} ({:?} shading)", config.shading);

        Ok(Self {
            config,
            state,
            flat,
            textured,
            assets,
        })
    }

    /// Re-lays the scene out after the drawable size changed.
    ///
    /// Must run before the next `draw` so the projection matches the surface.
    pub fn resize(&mut self, width: u32, height: u32) {
        let viewport = Viewport::from_physical(width, height);
        if !viewport.is_valid() || viewport == self.state.viewport() {
            return;
        }
        log::debug!("scene resized to {width}x{height}");
        self.state.resize(viewport);
    }

    /// Advances the animation by `elapsed_seconds`.
    pub fn update(&mut self, elapsed_seconds: f32) {
        self.state.update(elapsed_seconds);
    }

    /// Clears the target and draws the frame.
    ///
    /// Order: triangle and rectangle with premultiplied blending using the
    /// current shading program, then the four edges flat and unblended on top.
    pub fn draw(&mut self, ctx: &RenderCtx<'_>, target: &mut RenderTarget<'_>) {
        let Self {
            config,
            state,
            flat,
            textured,
            assets,
        } = self;

        target.clear(config.clear_color);

        let projection = state.projection();

        let shaded = match config.shading {
            ShadingMode::Textured => textured,
            ShadingMode::Flat => &mut *flat,
        };
        for sprite in [state.triangle(), state.rectangle()] {
            sprite.draw(ctx, target, shaded, assets, projection, Blend::Premultiplied);
        }

        for (_, edge) in state.edges().iter() {
            edge.draw(ctx, target, flat, assets, projection, Blend::Opaque);
        }
    }

    pub fn set_shading(&mut self, shading: ShadingMode) {
        if shading != self.config.shading {
            log::info!("shading: {shading:?}");
            self.config.shading = shading;
        }
    }

    /// Frees both programs, both textures and the meshes.
    pub fn release(self) {
        let Self {
            flat,
            textured,
            assets,
            ..
        } = self;

        flat.release();
        textured.release();
        assets.release();
        log::info!("scene released");
    }
}
