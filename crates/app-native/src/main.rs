use std::time::Instant;
use wgpu::util::DeviceExt;
use winit::{event::*, event_loop::EventLoop, window::WindowBuilder};

use app_core::{
    decode_feed, pick_card, pointer_ray, InputEvent, Viewer, CARD_ASPECT, PICK_SPHERE_RADIUS,
    SCROLL_PAGES,
};
use glam::{Mat4, Quat, Vec3};
use rand::prelude::*;

// Bundled sample feed; the real fetch lives outside this viewer.
static SAMPLE_FEED: &str = include_str!("../data/sample_feed.json");
const ARCHIVE_BASE: &str = "https://api.nasa.gov/EPIC/archive/natural/";
const API_KEY: &str = "DEMO_KEY";

// Decorative background starfield (host-side only, never core state).
const STAR_COUNT: usize = 400;
const STAR_FIELD_RADIUS: f32 = 12.0;
const STAR_SIZE: f32 = 0.035;
const STAR_DRIFT_PER_SEC: f32 = 1.0 / 15.0;
const STAR_COLOR: [f32; 3] = [1.0, 0.63, 0.88];

const WHEEL_LINE_PX: f32 = 48.0;
const HOVER_BRIGHTEN: f32 = 1.4;
const MAX_INSTANCES: usize = 512;

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct Uniforms {
    view_proj: [[f32; 4]; 4],
}

#[repr(C)]
#[derive(Copy, Clone, bytemuck::Pod, bytemuck::Zeroable)]
struct InstanceData {
    pos: [f32; 3],
    yaw: f32,
    scale: [f32; 2],
    color: [f32; 4],
}

struct GpuState<'w> {
    window: &'w winit::window::Window,
    surface: wgpu::Surface<'w>,
    device: wgpu::Device,
    queue: wgpu::Queue,
    config: wgpu::SurfaceConfiguration,
    pipeline: wgpu::RenderPipeline,
    uniform_buffer: wgpu::Buffer,
    quad_vb: wgpu::Buffer,
    instance_vb: wgpu::Buffer,
    bind_group: wgpu::BindGroup,
    width: u32,
    height: u32,
}

impl<'w> GpuState<'w> {
    async fn new(window: &'w winit::window::Window) -> anyhow::Result<Self> {
        let size = window.inner_size();
        let instance = wgpu::Instance::default();
        let surface = instance.create_surface(window)?;
        let adapter = instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::HighPerformance,
                compatible_surface: Some(&surface),
                force_fallback_adapter: false,
            })
            .await
            .ok_or_else(|| anyhow::anyhow!("No GPU adapter"))?;
        let (device, queue) = adapter
            .request_device(
                &wgpu::DeviceDescriptor {
                    required_features: wgpu::Features::empty(),
                    required_limits: wgpu::Limits::default(),
                    memory_hints: wgpu::MemoryHints::Performance,
                    label: None,
                },
                None,
            )
            .await?;

        let surface_caps = surface.get_capabilities(&adapter);
        let format = surface_caps.formats[0];
        let config = wgpu::SurfaceConfiguration {
            usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
            format,
            width: size.width,
            height: size.height,
            present_mode: wgpu::PresentMode::Fifo,
            alpha_mode: surface_caps.alpha_modes[0],
            desired_maximum_frame_latency: 2,
            view_formats: vec![],
        };
        surface.configure(&device, &config);

        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("shader"),
            source: wgpu::ShaderSource::Wgsl(app_core::SCENE_WGSL.into()),
        });

        let uniform_buffer = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("uniforms"),
            size: std::mem::size_of::<Uniforms>() as u64,
            usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        // Quad vertices for two triangles
        let quad_vertices: [f32; 12] = [
            -0.5, -0.5, 0.5, -0.5, 0.5, 0.5, -0.5, -0.5, 0.5, 0.5, -0.5, 0.5,
        ];
        let quad_vb = device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some("quad_vb"),
            contents: bytemuck::cast_slice(&quad_vertices),
            usage: wgpu::BufferUsages::VERTEX,
        });
        let instance_vb = device.create_buffer(&wgpu::BufferDescriptor {
            label: Some("instance_vb"),
            size: (std::mem::size_of::<InstanceData>() * MAX_INSTANCES) as u64,
            usage: wgpu::BufferUsages::VERTEX | wgpu::BufferUsages::COPY_DST,
            mapped_at_creation: false,
        });
        let bind_group_layout = device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("bgl"),
            entries: &[wgpu::BindGroupLayoutEntry {
                binding: 0,
                visibility: wgpu::ShaderStages::VERTEX_FRAGMENT,
                ty: wgpu::BindingType::Buffer {
                    ty: wgpu::BufferBindingType::Uniform,
                    has_dynamic_offset: false,
                    min_binding_size: None,
                },
                count: None,
            }],
        });
        let bind_group = device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("bg"),
            layout: &bind_group_layout,
            entries: &[wgpu::BindGroupEntry {
                binding: 0,
                resource: uniform_buffer.as_entire_binding(),
            }],
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("pl"),
            bind_group_layouts: &[&bind_group_layout],
            push_constant_ranges: &[],
        });

        let vertex_buffers = [
            // slot 0: quad positions
            wgpu::VertexBufferLayout {
                array_stride: (std::mem::size_of::<f32>() * 2) as u64,
                step_mode: wgpu::VertexStepMode::Vertex,
                attributes: &[wgpu::VertexAttribute {
                    format: wgpu::VertexFormat::Float32x2,
                    offset: 0,
                    shader_location: 0,
                }],
            },
            // slot 1: instance data
            wgpu::VertexBufferLayout {
                array_stride: std::mem::size_of::<InstanceData>() as u64,
                step_mode: wgpu::VertexStepMode::Instance,
                attributes: &[
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x3,
                        offset: 0,
                        shader_location: 1,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32,
                        offset: 12,
                        shader_location: 2,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x2,
                        offset: 16,
                        shader_location: 3,
                    },
                    wgpu::VertexAttribute {
                        format: wgpu::VertexFormat::Float32x4,
                        offset: 24,
                        shader_location: 4,
                    },
                ],
            },
        ];
        let pipeline = device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &vertex_buffers,
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            },
            primitive: wgpu::PrimitiveState::default(),
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format,
                    blend: Some(wgpu::BlendState::ALPHA_BLENDING),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: wgpu::PipelineCompilationOptions::default(),
            }),
            cache: None,
            multiview: None,
        });

        Ok(Self {
            window,
            surface,
            device,
            queue,
            config,
            pipeline,
            uniform_buffer,
            quad_vb,
            instance_vb,
            bind_group,
            width: size.width,
            height: size.height,
        })
    }

    fn resize(&mut self, new_size: winit::dpi::PhysicalSize<u32>) {
        if new_size.width == 0 || new_size.height == 0 {
            return;
        }
        self.width = new_size.width;
        self.height = new_size.height;
        self.config.width = new_size.width;
        self.config.height = new_size.height;
        self.surface.configure(&self.device, &self.config);
    }

    fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }

    fn render(
        &mut self,
        view_proj: Mat4,
        instances: &[InstanceData],
    ) -> Result<(), wgpu::SurfaceError> {
        let frame = self.surface.get_current_texture()?;
        let view = frame
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        self.queue.write_buffer(
            &self.uniform_buffer,
            0,
            bytemuck::bytes_of(&Uniforms {
                view_proj: view_proj.to_cols_array_2d(),
            }),
        );
        let count = instances.len().min(MAX_INSTANCES);
        self.queue
            .write_buffer(&self.instance_vb, 0, bytemuck::cast_slice(&instances[..count]));

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("encoder"),
            });
        {
            let mut rpass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("rpass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color {
                            r: 0.02,
                            g: 0.02,
                            b: 0.04,
                            a: 1.0,
                        }),
                        store: wgpu::StoreOp::Store,
                    },
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });
            rpass.set_pipeline(&self.pipeline);
            rpass.set_bind_group(0, &self.bind_group, &[]);
            rpass.set_vertex_buffer(0, self.quad_vb.slice(..));
            rpass.set_vertex_buffer(1, self.instance_vb.slice(..));
            rpass.draw(0..6, 0..count as u32);
        }
        self.queue.submit(Some(encoder.finish()));
        frame.present();
        Ok(())
    }
}

fn main() {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .init();

    let mut viewer = Viewer::default();
    match decode_feed(SAMPLE_FEED, ARCHIVE_BASE, API_KEY) {
        Ok(photos) => viewer.stage(InputEvent::PhotosLoaded(photos)),
        // An empty ring is a valid state; just report the bad feed.
        Err(e) => log::error!("sample feed: {e}"),
    }

    let stars = scatter_stars(STAR_COUNT, STAR_FIELD_RADIUS, 7);
    let mut star_rot = 0.0f32;

    let event_loop = EventLoop::new().expect("event loop");
    let window = WindowBuilder::new()
        .with_title("EPIC Ring Viewer")
        .build(&event_loop)
        .expect("window");

    let mut state = pollster::block_on(GpuState::new(&window)).expect("gpu");

    let mut picked: Option<usize> = None;
    let mut scroll_px = 0.0f32;
    let mut last_tick = Instant::now();

    event_loop
        .run(move |event, elwt| match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::Resized(size) => state.resize(size),
                WindowEvent::CloseRequested => elwt.exit(),
                WindowEvent::CursorMoved { position, .. } => {
                    let ndc_x = (2.0 * position.x as f32 / state.width.max(1) as f32) - 1.0;
                    let ndc_y = 1.0 - (2.0 * position.y as f32 / state.height.max(1) as f32);
                    viewer.stage(InputEvent::PointerMoved { x: ndc_x, y: ndc_y });

                    let camera = viewer.camera(state.aspect());
                    let (ro, rd) = pointer_ray(&camera, ndc_x, ndc_y);
                    let hit = pick_card(ro, rd, &viewer.card_centers(), PICK_SPHERE_RADIUS);
                    if hit != picked {
                        match hit {
                            Some(i) => viewer.stage(InputEvent::CardEntered(i)),
                            None => viewer.stage(InputEvent::CardLeft),
                        }
                        picked = hit;
                    }
                }
                WindowEvent::CursorLeft { .. } => {
                    if picked.take().is_some() {
                        viewer.stage(InputEvent::CardLeft);
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    scroll_px += match delta {
                        MouseScrollDelta::LineDelta(_, y) => -y * WHEEL_LINE_PX,
                        MouseScrollDelta::PixelDelta(p) => -p.y as f32,
                    };
                    let offset = scroll_px / (SCROLL_PAGES * state.height.max(1) as f32);
                    viewer.stage(InputEvent::ScrollOffset(offset));
                }
                _ => {}
            },
            Event::AboutToWait => {
                let now = Instant::now();
                let dt = (now - last_tick).as_secs_f32();
                last_tick = now;
                star_rot += dt * STAR_DRIFT_PER_SEC;

                let out = viewer.tick(dt);
                let photo_count = viewer.photos().len();
                let camera = viewer.camera(state.aspect());
                let view_proj = camera.projection_matrix() * camera.view_matrix();
                let instances = build_instances(&out, photo_count, &stars, star_rot);

                match state.render(view_proj, &instances) {
                    Ok(_) => state.window.request_redraw(),
                    Err(wgpu::SurfaceError::Lost) => state.resize(state.window.inner_size()),
                    Err(wgpu::SurfaceError::OutOfMemory) => elwt.exit(),
                    Err(_) => {}
                }
            }
            _ => {}
        })
        .unwrap();
}

/// Flatten one frame's output into draw order: stars, cards, label
/// marker, detail panel last.
fn build_instances(
    out: &app_core::FrameOutput,
    photo_count: usize,
    stars: &[Vec3],
    star_rot: f32,
) -> Vec<InstanceData> {
    let mut instances = Vec::with_capacity(stars.len() + photo_count + 2);

    let star_spin = Quat::from_rotation_y(star_rot);
    for p in stars {
        let pos = star_spin * *p;
        instances.push(InstanceData {
            pos: pos.to_array(),
            yaw: yaw_toward(out.camera.eye, pos),
            scale: [STAR_SIZE, STAR_SIZE],
            color: [STAR_COLOR[0], STAR_COLOR[1], STAR_COLOR[2], 0.8],
        });
    }

    let ring_spin = Quat::from_rotation_y(out.ring_rotation);
    for (i, card) in out.cards.iter().enumerate() {
        let pos = out.ring_offset + ring_spin * card.position + card.offset;
        let mut color = card_color(i, photo_count);
        if card.hovered {
            for ch in &mut color {
                *ch = (*ch * HOVER_BRIGHTEN).min(1.0);
            }
        }
        instances.push(InstanceData {
            pos: pos.to_array(),
            yaw: out.ring_rotation + card.rotation.y,
            scale: [card.scale.x, card.scale.y],
            color: [color[0], color[1], color[2], 1.0],
        });
    }

    if let Some(anchor) = out.label {
        let pos = out.ring_offset + ring_spin * anchor;
        instances.push(InstanceData {
            pos: pos.to_array(),
            yaw: yaw_toward(out.camera.eye, pos),
            scale: [0.6, 0.25],
            color: [0.95, 0.95, 0.95, 0.9],
        });
    }

    if let Some(panel) = &out.panel {
        let pos = out.ring_offset + Vec3::new(0.0, app_core::PANEL_IMAGE_HEIGHT, 0.0);
        let size = app_core::PANEL_IMAGE_SCALE * panel.zoom;
        instances.push(InstanceData {
            pos: pos.to_array(),
            yaw: yaw_toward(out.camera.eye, pos),
            scale: [size, size * CARD_ASPECT],
            color: [1.0, 1.0, 1.0, panel.opacity],
        });
    }

    instances
}

/// Yaw that turns a quad's +Z face toward the camera eye.
fn yaw_toward(eye: Vec3, pos: Vec3) -> f32 {
    (eye.x - pos.x).atan2(eye.z - pos.z)
}

fn card_color(index: usize, count: usize) -> [f32; 3] {
    let t = index as f32 / count.max(1) as f32 * std::f32::consts::TAU;
    [
        0.45 + 0.25 * t.sin(),
        0.55 + 0.20 * (t + 2.0).sin(),
        0.75 + 0.20 * (t + 4.0).sin(),
    ]
}

/// Uniformly scattered points inside a sphere, by rejection.
fn scatter_stars(count: usize, radius: f32, seed: u64) -> Vec<Vec3> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut points = Vec::with_capacity(count);
    while points.len() < count {
        let p = Vec3::new(
            rng.gen::<f32>() * 2.0 - 1.0,
            rng.gen::<f32>() * 2.0 - 1.0,
            rng.gen::<f32>() * 2.0 - 1.0,
        );
        if p.length_squared() <= 1.0 {
            points.push(p * radius);
        }
    }
    points
}
