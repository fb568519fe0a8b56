//! GPU context diagnostic.
//!
//! Opens a small window, negotiates a wgpu adapter for its surface,
//! reports what was negotiated, and tears everything down. Performs no
//! rendering; this exists to confirm that window and context creation
//! work on the current machine before blaming the renderer.

use anyhow::Result;
use winit::{
    application::ApplicationHandler,
    event::WindowEvent,
    event_loop::{ActiveEventLoop, EventLoop},
    window::{Window, WindowId},
};

#[derive(Default)]
struct App {
    probed: bool,
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.probed {
            return;
        }
        self.probed = true;

        let window_attrs = Window::default_attributes()
            .with_title("ORB GPU Tester")
            .with_inner_size(winit::dpi::PhysicalSize::new(300, 300));

        let window = std::sync::Arc::new(
            event_loop
                .create_window(window_attrs)
                .expect("Failed to create window"),
        );
        log::info!("Window created");

        let instance = wgpu::Instance::new(wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance
            .create_surface(window.clone())
            .expect("Failed to create surface");

        let adapter = pollster::block_on(instance.request_adapter(&wgpu::RequestAdapterOptions {
            power_preference: wgpu::PowerPreference::HighPerformance,
            compatible_surface: Some(&surface),
            force_fallback_adapter: false,
        }))
        .expect("No suitable GPU adapter found");

        let info = adapter.get_info();
        log::info!("Adapter: {} ({:?})", info.name, info.device_type);
        log::info!("Backend: {:?}", info.backend);
        if !info.driver_info.is_empty() {
            log::info!("Driver: {}", info.driver_info);
        }

        event_loop.exit();
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        if let WindowEvent::CloseRequested = event {
            event_loop.exit();
        }
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let mut app = App::default();
    event_loop.run_app(&mut app)?;

    Ok(())
}
