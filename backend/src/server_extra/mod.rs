pub mod observation_tiles;
