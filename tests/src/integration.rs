use std::collections::HashSet;
use std::net::Ipv4Addr;
use std::time::{Duration, Instant};

use q3scout_common::config::Config;
use q3scout_common::network::addr::ServerAddr;
use q3scout_common::status::ServerStatus;
use q3scout_core::{discovery, probe, reconcile, scanner};

use crate::fixtures;

fn fast_config(master: ServerAddr) -> Config {
    Config {
        master_port: master.port,
        master_timeout: Duration::from_millis(150),
        status_timeout: Duration::from_millis(100),
        ..Config::default()
    }
}

fn game_addr(last_octet: u8, port: u16) -> ServerAddr {
    ServerAddr::new(Ipv4Addr::new(203, 0, 113, last_octet), port)
}

const STATUS_REPLY: &[u8] =
    b"\xFF\xFF\xFF\xFFstatusResponse\n\\sv_hostname\\Fixture Arena\\game\\CPMA\\mapname\\q3dm17\n12 0 \"Sarge\"\n5 48 \"alice\"\n";

#[tokio::test]
async fn master_reply_split_across_packets_is_concatenated() {
    let first: Vec<ServerAddr> = vec![game_addr(1, 27960), game_addr(2, 27960)];
    let second: Vec<ServerAddr> = vec![game_addr(3, 27961)];
    let master = fixtures::spawn_master(vec![first.clone(), second.clone()]).await;

    let cfg: Config = fast_config(master);
    let servers = discovery::query_master("127.0.0.1", &cfg).await.unwrap();

    assert_eq!(servers, vec![first, second].concat());
}

#[tokio::test]
async fn unreachable_master_times_out_to_an_empty_list() {
    let (silent, _guard) = fixtures::spawn_silent_server().await;
    let cfg: Config = fast_config(silent);

    let started: Instant = Instant::now();
    let servers = discovery::query_master("127.0.0.1", &cfg).await.unwrap();

    assert!(servers.is_empty());
    assert!(started.elapsed() < Duration::from_secs(2));
}

#[tokio::test]
async fn status_probe_decodes_fields_and_players() {
    let server = fixtures::spawn_game_server(STATUS_REPLY.to_vec()).await;

    let status: ServerStatus = probe::query_status(server, Duration::from_millis(200)).await;

    assert!(status.present);
    assert_eq!(status.hostname(), Some("Fixture Arena"));
    assert_eq!(status.game(), Some("CPMA"));
    assert_eq!(status.mapname(), Some("q3dm17"));
    assert_eq!(status.players.len(), 2);
    assert_eq!(
        status.players[1].tokens(),
        &["5".to_string(), "48".to_string(), "\"alice\"".to_string()]
    );
}

#[tokio::test]
async fn status_probe_against_silent_host_returns_offline_within_bound() {
    let (silent, _guard) = fixtures::spawn_silent_server().await;
    let timeout: Duration = Duration::from_millis(100);

    let started: Instant = Instant::now();
    let status: ServerStatus = probe::query_status(silent, timeout).await;

    assert!(!status.present);
    assert!(status.fields.is_empty());
    // Timeout plus scheduling overhead, never a hang.
    assert!(started.elapsed() < timeout + Duration::from_millis(500));
}

#[tokio::test]
async fn scan_isolates_failures_and_keeps_cardinality() {
    let responding = fixtures::spawn_game_server(STATUS_REPLY.to_vec()).await;
    let (silent, _guard) = fixtures::spawn_silent_server().await;
    let erroring = fixtures::closed_port_addr().await;

    let targets: HashSet<ServerAddr> = [responding, silent, erroring].into_iter().collect();
    let cfg = Config {
        status_timeout: Duration::from_millis(100),
        ..Config::default()
    };

    let results = scanner::scan(targets.clone(), &cfg, None).await;

    assert_eq!(results.len(), 3);
    let seen: HashSet<ServerAddr> = results.iter().map(|(addr, _)| *addr).collect();
    assert_eq!(seen, targets);

    for (addr, status) in &results {
        if *addr == responding {
            assert!(status.present, "fixture server should respond");
            assert_eq!(status.hostname(), Some("Fixture Arena"));
        } else {
            assert!(!status.present, "{addr} should be reported offline");
        }
    }
}

#[tokio::test]
async fn discovery_to_scan_end_to_end() {
    let game = fixtures::spawn_game_server(STATUS_REPLY.to_vec()).await;
    let master = fixtures::spawn_master(vec![vec![game]]).await;
    let cfg: Config = fast_config(master);

    let targets = discovery::query_masters(&["127.0.0.1".to_string()], &cfg)
        .await
        .unwrap();
    assert_eq!(targets, HashSet::from([game]));

    let results = scanner::scan(targets, &cfg, None).await;
    assert_eq!(results.len(), 1);
    assert!(results[0].1.present);
}

#[tokio::test]
async fn union_merges_master_lists() {
    let a = game_addr(1, 27960);
    let b = game_addr(2, 27960);
    let c = game_addr(3, 27960);

    let merged = reconcile::union(&[vec![a, b], vec![b, c]]);
    assert_eq!(merged, HashSet::from([a, b, c]));
}
