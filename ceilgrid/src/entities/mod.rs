mod candidate;
mod interior;
mod layout;
mod material;
mod spacing;
mod surface;

#[doc(inline)]
pub use surface::SurfaceDimensions;

#[doc(inline)]
pub use surface::LengthUnit;

#[doc(inline)]
pub use spacing::SpacingSpec;

#[doc(inline)]
pub use interior::Interior;

#[doc(inline)]
pub use interior::Axis;

#[doc(inline)]
pub use material::MaterialSpec;

#[doc(inline)]
pub use candidate::LayoutCandidate;

#[doc(inline)]
pub use layout::LayoutResult;
