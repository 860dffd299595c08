// DOM hooks shared by the web frontend and the page stylesheet.

// Container attribute that opts into frame-rate independent actor speed
pub const SPEED_MODE_ATTR: &str = "data-drift-speed";
pub const SPEED_MODE_DELTA: &str = "delta";

// Attribute carrying the sprite key on every generated node
pub const SPRITE_ATTR: &str = "data-drift-sprite";

// Class names; layout and artwork live in the page CSS
pub const ACTOR_CLASS: &str = "drift-actor";
pub const RING_CLASS: &str = "drift-ring";
pub const SHAPE_CLASS: &str = "drift-shape";

// Toggled on an actor node while its dance runs
pub const DANCING_CLASS: &str = "is-dancing";

// Stacking: turtles above hero content, rings above everything
pub const ACTOR_Z_INDEX: &str = "40";
pub const RING_Z_INDEX: &str = "50";

// Touch drags do not move the follower rings or parallax shapes
pub const POINTER_TYPE_TOUCH: &str = "touch";
