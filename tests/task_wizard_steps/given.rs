//! Given steps for wizard and account verification scenarios.

use super::world::WizardWorld;
use eyre::WrapErr;
use rstest_bdd_macros::given;
use taskmatrix::identity::domain::UserAccount;

#[given("a signed-in user")]
fn signed_in_user(world: &mut WizardWorld) -> Result<(), eyre::Report> {
    world
        .users
        .insert(UserAccount::new(world.user_id))
        .wrap_err("seed signed-in user")?;
    world
        .sessions
        .sign_in(world.session.clone(), world.user_id)
        .wrap_err("bind scenario session")?;
    Ok(())
}

#[given("a signed-out user")]
fn signed_out_user(world: &mut WizardWorld) -> Result<(), eyre::Report> {
    world
        .sessions
        .sign_out(&world.session)
        .wrap_err("clear scenario session")?;
    Ok(())
}

#[given("a registered user without verification")]
fn unverified_user(world: &mut WizardWorld) -> Result<(), eyre::Report> {
    world
        .users
        .insert(UserAccount::new(world.user_id))
        .wrap_err("seed unverified user")?;
    Ok(())
}

#[given(r#"the wizard activity "{activity}""#)]
fn wizard_activity(world: &mut WizardWorld, activity: String) -> Result<(), eyre::Report> {
    let wizard = std::mem::take(&mut world.wizard).enter_activity(activity).next();
    eyre::ensure!(
        wizard.step() == taskmatrix::wizard::WizardStep::Urgency,
        "wizard should advance past the activity step"
    );
    world.wizard = wizard;
    Ok(())
}
