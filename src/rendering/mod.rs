mod digits;
mod efis;
mod landing_renderer;
mod map_renderer;
mod particles;
mod projection;
mod renderer;
mod shapes;
mod sprite;
mod terrain;
mod text;
mod types;

pub use digits::*;
pub use efis::*;
pub use landing_renderer::*;
pub use map_renderer::*;
pub use particles::*;
pub use projection::*;
pub use renderer::*;
pub use sprite::*;
pub use terrain::*;
pub use text::*;
pub use types::*;
