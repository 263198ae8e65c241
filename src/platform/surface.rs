use std::sync::Arc;

use wgpu::{BindGroup, BindGroupLayout, Device, Queue, RenderPipeline, Sampler, Surface, SurfaceConfiguration, Texture};
use winit::window::Window;

use crate::core::{DrawFrameInfo, WindowDimensions};

type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Uploads software frames to a texture and draws it over a window surface.
///
/// The frame is treated as a bottom-up RGBA bitmap whose fourth byte is
/// ignored.
pub struct SurfacePresenter {
    device: Device,
    queue: Queue,
    surface: Surface<'static>,
    surface_config: SurfaceConfiguration,
    render_pipeline: RenderPipeline,
    bind_group_layout: BindGroupLayout,
    sampler: Sampler,
    texture: Texture,
    bind_group: BindGroup,
    frame_size: WindowDimensions,
}

impl SurfacePresenter {
    /// Create a presenter for `window` sized for frames of `frame_size`
    pub async fn new(window: Arc<Window>, frame_size: WindowDimensions) -> Result<Self> {
        let size = window.inner_size();

        let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor {
            backends: wgpu::Backends::PRIMARY,
            ..Default::default()
        });

        let surface = instance.create_surface(window)?;
        let adapter = Self::request_adapter(&instance, &surface).await?;
        let (device, queue) = Self::request_device(&adapter).await?;

        let surface_config = Self::create_surface_config(&surface, &adapter, size.width, size.height)?;
        surface.configure(&device, &surface_config);
        log::info!(
            "Surface configured: {:?} {}x{}",
            surface_config.format,
            surface_config.width,
            surface_config.height
        );

        let bind_group_layout = Self::create_bind_group_layout(&device);
        let render_pipeline = Self::create_render_pipeline(&device, &bind_group_layout, surface_config.format);
        let sampler = device.create_sampler(&wgpu::SamplerDescriptor {
            label: Some("Frame Sampler"),
            address_mode_u: wgpu::AddressMode::ClampToEdge,
            address_mode_v: wgpu::AddressMode::ClampToEdge,
            address_mode_w: wgpu::AddressMode::ClampToEdge,
            mag_filter: wgpu::FilterMode::Nearest,
            min_filter: wgpu::FilterMode::Nearest,
            mipmap_filter: wgpu::FilterMode::Nearest,
            ..Default::default()
        });

        let texture = Self::create_frame_texture(&device, frame_size);
        let bind_group = Self::create_bind_group(&device, &bind_group_layout, &texture, &sampler);

        Ok(Self {
            device,
            queue,
            surface,
            surface_config,
            render_pipeline,
            bind_group_layout,
            sampler,
            texture,
            bind_group,
            frame_size,
        })
    }

    async fn request_adapter(instance: &wgpu::Instance, surface: &Surface<'_>) -> Result<wgpu::Adapter> {
        instance
            .request_adapter(&wgpu::RequestAdapterOptions {
                power_preference: wgpu::PowerPreference::default(),
                compatible_surface: Some(surface),
                force_fallback_adapter: false,
            })
            .await
            .map_err(|e| format!("Failed to find appropriate adapter: {:?}", e).into())
    }

    async fn request_device(adapter: &wgpu::Adapter) -> Result<(Device, Queue)> {
        adapter
            .request_device(&wgpu::DeviceDescriptor {
                label: Some("Presenter Device"),
                required_features: wgpu::Features::empty(),
                required_limits: wgpu::Limits::default(),
                memory_hints: Default::default(),
                experimental_features: Default::default(),
                trace: Default::default(),
            })
            .await
            .map_err(|e| e.into())
    }

    fn create_surface_config(
        surface: &Surface<'_>,
        adapter: &wgpu::Adapter,
        width: u32,
        height: u32,
    ) -> Result<SurfaceConfiguration> {
        let surface_caps = surface.get_capabilities(adapter);
        surface_config_for(&surface_caps.formats, &surface_caps.alpha_modes, width, height)
    }

    /// Present one frame. A lost or outdated surface is reconfigured and the
    /// frame skipped.
    pub fn present(&mut self, frame: &DrawFrameInfo<'_>) -> Result<()> {
        let dimensions = frame.dimensions();
        let expected_size = dimensions
            .buffer_size()
            .ok_or("frame dimensions overflow")?;
        if frame.pixels.len() != expected_size {
            return Err(format!(
                "Invalid pixel buffer size: expected {} bytes, got {}",
                expected_size,
                frame.pixels.len()
            )
            .into());
        }
        if expected_size == 0 {
            return Ok(());
        }

        if dimensions != self.frame_size {
            log::debug!("Frame size changed to {}x{}", dimensions.width, dimensions.height);
            self.frame_size = dimensions;
            self.texture = Self::create_frame_texture(&self.device, dimensions);
            self.bind_group = Self::create_bind_group(&self.device, &self.bind_group_layout, &self.texture, &self.sampler);
        }

        self.queue.write_texture(
            self.texture.as_image_copy(),
            frame.pixels,
            wgpu::TexelCopyBufferLayout {
                offset: 0,
                bytes_per_row: Some(4 * frame.width),
                rows_per_image: Some(frame.height),
            },
            wgpu::Extent3d {
                width: frame.width,
                height: frame.height,
                depth_or_array_layers: 1,
            },
        );

        let surface_texture = match self.surface.get_current_texture() {
            Ok(texture) => texture,
            Err(wgpu::SurfaceError::Lost | wgpu::SurfaceError::Outdated) => {
                log::warn!("Surface lost, reconfiguring");
                self.surface.configure(&self.device, &self.surface_config);
                return Ok(());
            }
            Err(wgpu::SurfaceError::Timeout) => {
                log::warn!("Surface timeout, skipping frame");
                return Ok(());
            }
            Err(e) => return Err(e.into()),
        };

        let surface_view = surface_texture
            .texture
            .create_view(&wgpu::TextureViewDescriptor::default());

        let mut encoder = self
            .device
            .create_command_encoder(&wgpu::CommandEncoderDescriptor {
                label: Some("Present Encoder"),
            });

        {
            let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                label: Some("Present Pass"),
                color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                    view: &surface_view,
                    resolve_target: None,
                    ops: wgpu::Operations {
                        load: wgpu::LoadOp::Clear(wgpu::Color::BLACK),
                        store: wgpu::StoreOp::Store,
                    },
                    depth_slice: None,
                })],
                depth_stencil_attachment: None,
                timestamp_writes: None,
                occlusion_query_set: None,
            });

            render_pass.set_pipeline(&self.render_pipeline);
            render_pass.set_bind_group(0, &self.bind_group, &[]);
            render_pass.draw(0..3, 0..1); // Fullscreen triangle
        }

        self.queue.submit(Some(encoder.finish()));
        surface_texture.present();

        Ok(())
    }

    /// Resize the surface; the frame texture keeps following the frame size
    pub fn resize(&mut self, width: u32, height: u32) {
        if width == 0 || height == 0 {
            return;
        }

        self.surface_config.width = width;
        self.surface_config.height = height;
        self.surface.configure(&self.device, &self.surface_config);
    }

    fn create_frame_texture(device: &Device, size: WindowDimensions) -> Texture {
        device.create_texture(&wgpu::TextureDescriptor {
            label: Some("Frame Texture"),
            size: wgpu::Extent3d {
                width: size.width.max(1),
                height: size.height.max(1),
                depth_or_array_layers: 1,
            },
            mip_level_count: 1,
            sample_count: 1,
            dimension: wgpu::TextureDimension::D2,
            format: wgpu::TextureFormat::Rgba8Unorm,
            usage: wgpu::TextureUsages::TEXTURE_BINDING | wgpu::TextureUsages::COPY_DST,
            view_formats: &[],
        })
    }

    fn create_bind_group_layout(device: &Device) -> BindGroupLayout {
        device.create_bind_group_layout(&wgpu::BindGroupLayoutDescriptor {
            label: Some("Frame Bind Group Layout"),
            entries: &[
                wgpu::BindGroupLayoutEntry {
                    binding: 0,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Texture {
                        sample_type: wgpu::TextureSampleType::Float { filterable: true },
                        view_dimension: wgpu::TextureViewDimension::D2,
                        multisampled: false,
                    },
                    count: None,
                },
                wgpu::BindGroupLayoutEntry {
                    binding: 1,
                    visibility: wgpu::ShaderStages::FRAGMENT,
                    ty: wgpu::BindingType::Sampler(wgpu::SamplerBindingType::Filtering),
                    count: None,
                },
            ],
        })
    }

    fn create_bind_group(device: &Device, layout: &BindGroupLayout, texture: &Texture, sampler: &Sampler) -> BindGroup {
        let view = texture.create_view(&wgpu::TextureViewDescriptor::default());

        device.create_bind_group(&wgpu::BindGroupDescriptor {
            label: Some("Frame Bind Group"),
            layout,
            entries: &[
                wgpu::BindGroupEntry {
                    binding: 0,
                    resource: wgpu::BindingResource::TextureView(&view),
                },
                wgpu::BindGroupEntry {
                    binding: 1,
                    resource: wgpu::BindingResource::Sampler(sampler),
                },
            ],
        })
    }

    fn create_render_pipeline(
        device: &Device,
        bind_group_layout: &BindGroupLayout,
        surface_format: wgpu::TextureFormat,
    ) -> RenderPipeline {
        let shader = device.create_shader_module(wgpu::ShaderModuleDescriptor {
            label: Some("Frame Display Shader"),
            source: wgpu::ShaderSource::Wgsl(include_str!("../display.wgsl").into()),
        });

        let pipeline_layout = device.create_pipeline_layout(&wgpu::PipelineLayoutDescriptor {
            label: Some("Frame Pipeline Layout"),
            bind_group_layouts: &[bind_group_layout],
            push_constant_ranges: &[],
        });

        device.create_render_pipeline(&wgpu::RenderPipelineDescriptor {
            label: Some("Frame Pipeline"),
            layout: Some(&pipeline_layout),
            vertex: wgpu::VertexState {
                module: &shader,
                entry_point: Some("vs_main"),
                buffers: &[],
                compilation_options: Default::default(),
            },
            fragment: Some(wgpu::FragmentState {
                module: &shader,
                entry_point: Some("fs_main"),
                targets: &[Some(wgpu::ColorTargetState {
                    format: surface_format,
                    blend: Some(wgpu::BlendState::REPLACE),
                    write_mask: wgpu::ColorWrites::ALL,
                })],
                compilation_options: Default::default(),
            }),
            primitive: wgpu::PrimitiveState {
                topology: wgpu::PrimitiveTopology::TriangleList,
                ..Default::default()
            },
            depth_stencil: None,
            multisample: wgpu::MultisampleState::default(),
            multiview: None,
            cache: None,
        })
    }
}

/// Surface configuration for the reported capabilities. Fails when the
/// adapter reports no format or no alpha mode for the surface.
fn surface_config_for(
    formats: &[wgpu::TextureFormat],
    alpha_modes: &[wgpu::CompositeAlphaMode],
    width: u32,
    height: u32,
) -> Result<SurfaceConfiguration> {
    let format = select_surface_format(formats).ok_or("surface reports no supported formats")?;
    let alpha_mode = *alpha_modes.first().ok_or("surface reports no alpha modes")?;

    Ok(SurfaceConfiguration {
        usage: wgpu::TextureUsages::RENDER_ATTACHMENT,
        format,
        width: width.max(1),
        height: height.max(1),
        present_mode: wgpu::PresentMode::Fifo,
        alpha_mode,
        view_formats: vec![],
        desired_maximum_frame_latency: 2,
    })
}

/// Prefer a non-sRGB format: frame bytes are already display values and an
/// sRGB target would re-encode them.
fn select_surface_format(formats: &[wgpu::TextureFormat]) -> Option<wgpu::TextureFormat> {
    formats
        .iter()
        .copied()
        .find(|f| !f.is_srgb())
        .or_else(|| formats.first().copied())
}

#[cfg(test)]
mod tests {
    use super::*;
    use wgpu::{CompositeAlphaMode, TextureFormat};

    #[test]
    fn test_format_prefers_linear() {
        let formats = [TextureFormat::Bgra8UnormSrgb, TextureFormat::Bgra8Unorm];
        assert_eq!(select_surface_format(&formats), Some(TextureFormat::Bgra8Unorm));
    }

    #[test]
    fn test_format_falls_back_to_first() {
        let formats = [TextureFormat::Rgba8UnormSrgb];
        assert_eq!(select_surface_format(&formats), Some(TextureFormat::Rgba8UnormSrgb));
    }

    #[test]
    fn test_empty_capabilities_are_an_error() {
        assert!(surface_config_for(&[], &[CompositeAlphaMode::Opaque], 640, 480).is_err());
        assert!(surface_config_for(&[TextureFormat::Bgra8Unorm], &[], 640, 480).is_err());
    }

    #[test]
    fn test_config_uses_reported_capabilities() {
        let config = surface_config_for(
            &[TextureFormat::Bgra8Unorm],
            &[CompositeAlphaMode::Opaque],
            0,
            480,
        )
        .unwrap();
        assert_eq!(config.format, TextureFormat::Bgra8Unorm);
        assert_eq!(config.alpha_mode, CompositeAlphaMode::Opaque);
        assert_eq!((config.width, config.height), (1, 480));
    }
}
