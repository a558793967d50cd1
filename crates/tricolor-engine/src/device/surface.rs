/// Returns `requested` if the surface supports it.
///
/// No fallback: rendering to another format would silently change the output.
pub(crate) fn choose_surface_format(
    supported: &[wgpu::TextureFormat],
    requested: wgpu::TextureFormat,
) -> Option<wgpu::TextureFormat> {
    supported.contains(&requested).then_some(requested)
}

/// Returns `requested` if supported, otherwise the surface's first mode.
pub(crate) fn choose_alpha_mode(
    supported: &[wgpu::CompositeAlphaMode],
    requested: wgpu::CompositeAlphaMode,
) -> wgpu::CompositeAlphaMode {
    Some(requested)
        .filter(|m| supported.contains(m))
        .or_else(|| supported.first().copied())
        .unwrap_or(wgpu::CompositeAlphaMode::Auto)
}
