use std::time::{Duration, Instant};
use winit::{
    event::*,
    event_loop::{ControlFlow, EventLoop},
    keyboard::{KeyCode, PhysicalKey},
    window::WindowBuilder,
};

use folio_motion::{
    CarouselConfig, CarouselController, FrameClock, HeaderConfig, MotionScene, ParallaxConfig,
    ScrollConfig, Viewport,
};

mod scheduler;
use scheduler::DeadlineScheduler;

const LINE_SCROLL_PX: f32 = 40.0;
const FRAME_INTERVAL: Duration = Duration::from_millis(16);
const REPORT_INTERVAL: Duration = Duration::from_millis(500);
const PREVIEW_SLIDES: usize = 4;

fn main() -> anyhow::Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let event_loop = EventLoop::new()?;
    let window = WindowBuilder::new()
        .with_title("folio motion preview (native)")
        .build(&event_loop)?;
    let size = window.inner_size();

    let mut scene = MotionScene::new(
        Viewport::new(size.width as f32, size.height as f32),
        ScrollConfig::default(),
    );
    scene.set_header(HeaderConfig::default());
    let card = scene.bind_parallax(
        ParallaxConfig::default()
            .with_rotation(10.0)
            .with_scale(0.05)
            .with_glare(true),
    );
    let backdrop = scene.bind_parallax(ParallaxConfig::default().with_factor(0.4).reversed(true));
    scene.pointer.subscribe(|p| {
        if !p.in_viewport {
            log::debug!("[pointer] left the window");
        }
    });
    scene.scroll.subscribe(|s| log::debug!("[scroll] progress={:.2}", s.progress));
    scene.start();

    let mut carousel = CarouselController::new(
        CarouselConfig::new(PREVIEW_SLIDES),
        DeadlineScheduler::new(),
    );
    carousel.start();

    let origin = Instant::now();
    let mut clock = FrameClock::default();
    let mut scroll_offset = 0.0f32;
    let mut hovering = false;
    let mut last_report = origin;
    log::info!("arrows: prev/next  h: hover  space: autoplay  wheel: scroll");

    event_loop.run(move |event, elwt| match event {
        Event::WindowEvent { event, .. } => match event {
            WindowEvent::CloseRequested => {
                carousel.stop();
                scene.teardown();
                elwt.exit();
            }
            WindowEvent::Resized(size) => scene
                .pointer
                .set_viewport(size.width as f32, size.height as f32),
            WindowEvent::CursorMoved { position, .. } => scene
                .pointer
                .handle_move(position.x as f32, position.y as f32),
            WindowEvent::CursorLeft { .. } => scene.pointer.handle_leave(),
            WindowEvent::MouseWheel { delta, .. } => {
                let dy = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y * LINE_SCROLL_PX,
                    MouseScrollDelta::PixelDelta(p) => p.y as f32,
                };
                scroll_offset = (scroll_offset - dy).max(0.0);
                scene.scroll.handle_scroll(scroll_offset);
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state: ElementState::Pressed,
                        repeat: false,
                        ..
                    },
                ..
            } => {
                match code {
                    KeyCode::ArrowRight => carousel.next(),
                    KeyCode::ArrowLeft => carousel.prev(),
                    KeyCode::Space => carousel.toggle_autoplay(),
                    KeyCode::KeyH => {
                        hovering = !hovering;
                        if hovering {
                            carousel.hover_start();
                        } else {
                            carousel.hover_end();
                        }
                    }
                    KeyCode::Digit1 | KeyCode::Digit2 | KeyCode::Digit3 | KeyCode::Digit4 => {
                        let index = match code {
                            KeyCode::Digit1 => 0,
                            KeyCode::Digit2 => 1,
                            KeyCode::Digit3 => 2,
                            _ => 3,
                        };
                        carousel.select_index(index);
                    }
                    KeyCode::Escape => elwt.exit(),
                    _ => return,
                }
                log::info!("[carousel] {:?}", carousel.state());
            }
            _ => {}
        },
        Event::AboutToWait => {
            let now = Instant::now();
            while let Some(handle) = carousel.scheduler_mut().pop_due(now) {
                carousel.on_timer_fire(handle);
                log::info!("[carousel] autoplay -> {:?}", carousel.active_index());
            }

            scene.frame(clock.advance(now - origin));
            // nothing moves while every spring is settled
            if !scene.is_at_rest() && now.duration_since(last_report) >= REPORT_INTERVAL {
                last_report = now;
                if let Some(out) = scene.parallax_output(card) {
                    log::info!(
                        "[card] x={:.1} y={:.1} rot=({:.1},{:.1}) scale={:.3} glare={:.2}",
                        out.offset_x,
                        out.offset_y,
                        out.rotate_x,
                        out.rotate_y,
                        out.scale,
                        out.glare_opacity
                    );
                }
                if let Some(out) = scene.parallax_output(backdrop) {
                    log::debug!("[backdrop] x={:.1} y={:.1}", out.offset_x, out.offset_y);
                }
                if let Some(out) = scene.header_output() {
                    log::info!(
                        "[header] height={:.1} backdrop={:.2} scrolled={}",
                        out.height_px,
                        out.backdrop_opacity,
                        out.scrolled
                    );
                }
            }

            let mut wake = now + FRAME_INTERVAL;
            if let Some(deadline) = carousel.scheduler().next_deadline() {
                wake = wake.min(deadline);
            }
            elwt.set_control_flow(ControlFlow::WaitUntil(wake));
        }
        _ => {}
    })?;
    Ok(())
}
