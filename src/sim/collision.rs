//! Player/platform collision resolution
//!
//! Pairwise AABB overlap plus a directional tie-break: a bounce only
//! fires when the player is falling AND came from above the platform's
//! top edge on the previous frame. Either check alone misfires - velocity
//! alone re-bounces a player rising through the platform from below, the
//! edge check alone can fire on a sideways clip - so both are required.

use crate::consts::MIN_PLATFORM_REBOUND_SPEED;

use super::platform::Platform;
use super::player::Player;

/// Run the collision pass over the active entity set (currently the one
/// player/platform pair). `prev_player_bottom` is the player's bottom
/// edge captured before this frame's integration.
///
/// On a valid hit: the platform's bounce fires exactly once, the player's
/// bottom edge is snapped onto the platform's top edge, and the player's
/// vertical velocity is reflected upward with the rebound floor applied.
/// Returns whether a bounce happened.
pub fn process(player: &mut Player, platform: &mut Platform, prev_player_bottom: f32) -> bool {
    if !player.aabb().overlaps(&platform.aabb()) {
        return false;
    }

    let falling = player.body.vel.y > 0.0;
    let from_above = prev_player_bottom <= platform.top();
    if !falling || !from_above {
        // Already past or through the platform; resolving here would
        // teleport the player backward at high velocity (tunneling).
        return false;
    }

    platform.bounce();
    player.body.pos.y = platform.top() - player.size.y;
    player.body.vel.y = -player.body.vel.y.abs().max(MIN_PLATFORM_REBOUND_SPEED);
    true
}
