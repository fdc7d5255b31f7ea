pub mod accent;
pub mod body;
pub mod camera;
pub mod color;
pub mod config;
pub mod constants;
pub mod controls;
pub mod damp;
pub mod hero;
pub mod lighting;
pub mod palette;
pub mod physics;
pub mod pointer;
pub mod scene;

pub use accent::AccentState;
pub use body::Body;
pub use camera::Camera;
pub use color::{ColorError, Rgb};
pub use config::{ConfigError, SceneParams};
pub use controls::{command_for_key, SceneCommand};
pub use damp::DampedColor;
pub use hero::{FloatMotion, HeroLine, HeroText};
pub use lighting::{DirectionalLight, LightingRig};
pub use palette::{BodySpec, Material, VisualVariant, ACCENTS};
pub use physics::{BodyDesc, BodyHandle, BodyKind, BodyShape, PhysicsWorld, RapierWorld};
pub use pointer::{pointer_to_scene, PointerProxy, Viewport};
pub use scene::{FrameInput, FrameReport, SceneController, SphereInstance};
