use winit::event::WindowEvent;
use winit::window::WindowId;

use mandelview_engine::coords::Viewport;
use mandelview_engine::core::{App, AppControl, FrameCtx};
use mandelview_engine::input::InputState;
use mandelview_engine::paint::Color;
use mandelview_engine::render::{FullscreenRenderer, ShaderProgram};
use mandelview_engine::window::LoopPhase;

use crate::config::ViewerConfig;
use crate::controls::KeyBindings;
use crate::shader::ViewUniform;
use crate::view::View;

/// Frames between debug statistics lines.
const STATS_INTERVAL: u64 = 600;

/// The Mandelbrot viewer: view state, key bindings, and the quad renderer.
pub struct Viewer {
    config: ViewerConfig,
    bindings: KeyBindings,
    view: View,
    phase: LoopPhase,
    renderer: FullscreenRenderer<ViewUniform>,
}

impl Viewer {
    pub fn new(config: ViewerConfig, bindings: KeyBindings, program: ShaderProgram) -> Self {
        Self {
            config,
            bindings,
            view: View::default(),
            phase: LoopPhase::Running,
            renderer: FullscreenRenderer::new(program),
        }
    }

    pub fn view(&self) -> View {
        self.view
    }

    pub fn phase(&self) -> LoopPhase {
        self.phase
    }

    /// Reacts to a window event. A close request moves to `Exiting`.
    pub fn handle_event(&mut self, event: &WindowEvent) -> AppControl {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("quit requested");
                self.phase = LoopPhase::Exiting;
                AppControl::Exit
            }
            _ => AppControl::Continue,
        }
    }

    /// Applies the held keys once and returns the uniforms for this frame.
    ///
    /// Returns `None` once exiting, so nothing is updated or drawn after a
    /// quit, and while the viewport is empty (minimized window), so held keys
    /// do not move the view while nothing is shown.
    pub fn prepare_frame(&mut self, input: &InputState, viewport: Viewport) -> Option<ViewUniform> {
        if self.phase == LoopPhase::Exiting || !viewport.is_valid() {
            return None;
        }

        if self.bindings.apply(&mut self.view, input, &self.config) {
            log::trace!(
                "view center ({}, {}) zoom {}",
                self.view.center.x,
                self.view.center.y,
                self.view.zoom()
            );
        }

        Some(ViewUniform::new(&self.view, viewport, self.config.max_iterations))
    }
}

impl App for Viewer {
    fn on_window_event(&mut self, _window_id: WindowId, event: &WindowEvent) -> AppControl {
        self.handle_event(event)
    }

    fn on_frame(&mut self, ctx: &mut FrameCtx<'_, '_>) -> AppControl {
        let Some(uniform) = self.prepare_frame(ctx.input, ctx.viewport()) else {
            return match self.phase {
                LoopPhase::Exiting => AppControl::Exit,
                LoopPhase::Running => AppControl::Continue,
            };
        };

        let t = ctx.time;
        if t.frame_index > 0 && t.frame_index % STATS_INTERVAL == 0 {
            log::debug!(
                "frame {}: {:.1} fps average, last frame {:.2} ms, zoom {}",
                t.frame_index,
                t.frame_index as f32 / t.elapsed.max(f32::EPSILON),
                t.dt * 1000.0,
                self.view.zoom()
            );
        }

        let renderer = &mut self.renderer;
        ctx.render(Color::BLACK, |rctx, target| {
            renderer.render(rctx, target, &uniform);
        })
    }
}
