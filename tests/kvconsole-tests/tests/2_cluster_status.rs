use anyhow::Result;
use kvconsole::cluster::{circular_layout, ClusterSnapshot, MemberState};
use kvconsole_tests::Console;
use serial_test::serial;
use std::time::Duration;
use tokio::sync::watch;

async fn wait_until(
    rx: &mut watch::Receiver<ClusterSnapshot>,
    pred: impl Fn(&ClusterSnapshot) -> bool,
) -> Result<()> {
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            if pred(&rx.borrow()) {
                return Ok::<(), anyhow::Error>(());
            }
            rx.changed().await?;
        }
    })
    .await??;
    Ok(())
}

#[serial]
#[test_log::test(tokio::test(flavor = "multi_thread"))]
async fn poll_publishes_snapshot_with_layout() -> Result<()> {
    let console = Console::new()?.with_poll_period(100);
    console.env().set_members(vec![
        env::member("n0", true),
        env::member("n1", false),
        env::member("n2", false),
    ]);

    let poller = console.poller();
    let mut rx = poller.snapshot();
    let _scope = poller.start("status");

    wait_until(&mut rx, |s| !s.is_empty()).await?;

    let snap = rx.borrow().clone();
    assert_eq!(snap.members.len(), 3);
    assert_eq!(snap.members[0].0.state(), MemberState::Leader);
    assert_eq!(snap.members[1].0.state(), MemberState::Follower);

    // backend order maps straight onto the circle positions
    let expected = circular_layout(3);
    for (i, (_, placement)) in snap.members.iter().enumerate() {
        assert_eq!(*placement, expected[i]);
    }
    Ok(())
}

#[serial]
#[test_log::test(tokio::test(flavor = "multi_thread"))]
async fn teardown_parks_snapshot_and_restart_restores_it() -> Result<()> {
    let console = Console::new()?.with_poll_period(100);
    console
        .env()
        .set_members(vec![env::member("n0", true), env::member("n1", false)]);

    let poller = console.poller();
    let mut rx = poller.snapshot();
    let scope = poller.start("status");
    wait_until(&mut rx, |s| !s.is_empty()).await?;
    drop(scope);

    // the backend goes dark; a re-activated view must still show the
    // parked member set instead of an empty flash
    console.env().fail_status(true);
    let _scope = poller.start("status");
    assert_eq!(poller.snapshot().borrow().members.len(), 2);

    // failures surface on the side channel without unpublishing
    let mut err_rx = poller.last_error();
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            if err_rx.borrow().is_some() {
                return Ok::<(), anyhow::Error>(());
            }
            err_rx.changed().await?;
        }
    })
    .await??;
    assert_eq!(poller.snapshot().borrow().members.len(), 2);
    Ok(())
}

#[serial]
#[test_log::test(tokio::test(flavor = "multi_thread"))]
async fn dropping_the_scope_stops_the_timer() -> Result<()> {
    let console = Console::new()?.with_poll_period(100);
    console.env().set_members(vec![env::member("n0", true)]);

    let poller = console.poller();
    let mut rx = poller.snapshot();
    let scope = poller.start("status");
    wait_until(&mut rx, |s| !s.is_empty()).await?;
    drop(scope);

    let settled = console.env().status_hits();
    tokio::time::sleep(Duration::from_millis(500)).await;
    // at most one in-flight tick may still land after cancellation
    assert!(console.env().status_hits() <= settled + 1);
    Ok(())
}

#[serial]
#[test_log::test(tokio::test(flavor = "multi_thread"))]
async fn fetch_failure_keeps_previous_snapshot_and_polling() -> Result<()> {
    let console = Console::new()?.with_poll_period(100);
    console.env().set_members(vec![env::member("n0", true)]);

    let poller = console.poller();
    let mut rx = poller.snapshot();
    let _scope = poller.start("status");
    wait_until(&mut rx, |s| !s.is_empty()).await?;

    console.env().fail_status(true);
    let mut err_rx = poller.last_error();
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            if err_rx.borrow().is_some() {
                return Ok::<(), anyhow::Error>(());
            }
            err_rx.changed().await?;
        }
    })
    .await??;
    assert_eq!(poller.snapshot().borrow().members.len(), 1);

    // recovery clears the side channel on the next successful tick
    console.env().fail_status(false);
    tokio::time::timeout(Duration::from_secs(5), async {
        loop {
            if err_rx.borrow().is_none() {
                return Ok::<(), anyhow::Error>(());
            }
            err_rx.changed().await?;
        }
    })
    .await??;
    Ok(())
}
