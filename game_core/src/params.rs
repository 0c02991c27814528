/// Game tuning parameters for table pong
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Table (3D variant), half extents
    pub const TABLE_HALF_WIDTH: f32 = 5.0;
    pub const TABLE_HALF_HEIGHT: f32 = 4.0;
    pub const TABLE_HALF_LENGTH: f32 = 6.0;
    pub const TABLE_PADDLE_RADIUS: f32 = 1.0;
    pub const TABLE_PADDLE_OFFSET: f32 = 5.0;
    pub const TABLE_BALL_RADIUS: f32 = 0.5;

    // Flat (2D variant), half extents
    pub const FLAT_HALF_WIDTH: f32 = 5.0;
    pub const FLAT_HALF_HEIGHT: f32 = 3.0;
    pub const FLAT_HALF_LENGTH: f32 = 2.0;
    pub const FLAT_PADDLE_RADIUS: f32 = 1.0;
    pub const FLAT_PADDLE_OFFSET: f32 = 3.5;
    pub const FLAT_BALL_RADIUS: f32 = 0.2;

    // Motion, in world units per tick
    pub const PADDLE_SPEED: f32 = 0.1;
    pub const SERVE_SPEED: f32 = 0.2;
    pub const PADDLE_BOOST: f32 = 1.1;
}
