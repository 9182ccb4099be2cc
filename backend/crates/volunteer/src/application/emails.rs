//! Signup Email Bodies
//!
//! Inline-styled HTML, kept simple enough to render in every mail client.

use crate::domain::calendar_link::calendar_link;
use crate::domain::submission::SignupSubmission;

/// Confirmation sent to the volunteer.
pub fn confirmation_html(submission: &SignupSubmission) -> String {
    let link = calendar_link(
        submission.title(),
        submission.opportunity_date.as_deref(),
        submission.opportunity_location.as_deref(),
    );

    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>Volunteer Signup Confirmation</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background: #00b140; padding: 30px; text-align: center; border-radius: 10px 10px 0 0;">
    <h1 style="color: white; margin: 0; font-size: 28px;">Thank You for Volunteering!</h1>
  </div>
  <div style="background: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px;">
    <p style="font-size: 18px;">Hi {name},</p>
    <p>Thank you for signing up to volunteer! Your commitment to our school community means so much.</p>
    <div style="background: white; border-left: 4px solid #00b140; padding: 20px; margin: 20px 0;">
      <h3 style="margin: 0 0 15px 0; color: #00b140;">Volunteer Opportunity Details</h3>
      <p><strong>Event:</strong> {title}</p>
{details}    </div>
    <div style="text-align: center; margin: 30px 0;">
      <a href="{link}" style="background: #00b140; color: white; padding: 12px 24px; text-decoration: none; border-radius: 5px; font-weight: bold; display: inline-block;">Add to Calendar</a>
    </div>
    <p><strong>What happens next?</strong></p>
    <ul>
      <li>Please arrive 10 minutes early to check in</li>
      <li>If you need to cancel, please contact us as soon as possible</li>
    </ul>
    <p>Thank you again for your support!</p>
  </div>
</body>
</html>
"#,
        name = escape(&submission.name),
        title = escape(submission.title()),
        details = detail_rows(&[
            ("Date", submission.opportunity_date.as_deref()),
            ("Time", submission.opportunity_time.as_deref()),
            ("Location", submission.opportunity_location.as_deref()),
        ]),
        link = link,
    )
}

/// Notification sent to the organization inbox.
pub fn notification_html(submission: &SignupSubmission) -> String {
    format!(
        r#"<!DOCTYPE html>
<html>
<head>
  <meta charset="utf-8">
  <meta name="viewport" content="width=device-width, initial-scale=1.0">
  <title>New Volunteer Signup</title>
</head>
<body style="font-family: Arial, sans-serif; line-height: 1.6; color: #333; max-width: 600px; margin: 0 auto; padding: 20px;">
  <div style="background: #00b140; padding: 30px; text-align: center; border-radius: 10px 10px 0 0;">
    <h1 style="color: white; margin: 0; font-size: 28px;">New Volunteer Signup</h1>
  </div>
  <div style="background: #f9f9f9; padding: 30px; border-radius: 0 0 10px 10px;">
    <div style="background: white; padding: 20px; margin: 20px 0; border-radius: 5px;">
      <p><strong>Name:</strong> {name}</p>
      <p><strong>Email:</strong> {email}</p>
{contact}      <p><strong>Opportunity:</strong> {title}</p>
{details}    </div>
    <p><strong>Action Required:</strong></p>
    <ul>
      <li>Confirm the volunteer signup</li>
      <li>Send any additional information to the volunteer</li>
    </ul>
    <p>This signup has been recorded in the signup sheet automatically.</p>
  </div>
</body>
</html>
"#,
        name = escape(&submission.name),
        email = escape(&submission.email),
        contact = detail_rows(&[("Phone", submission.phone.as_deref())]),
        title = escape(submission.title()),
        details = detail_rows(&[
            ("Date", submission.opportunity_date.as_deref()),
            ("Time", submission.opportunity_time.as_deref()),
            ("Location", submission.opportunity_location.as_deref()),
            ("Notes", submission.message.as_deref()),
        ]),
    )
}

/// One `<p>` per present field, absent fields omitted entirely.
fn detail_rows(fields: &[(&str, Option<&str>)]) -> String {
    fields
        .iter()
        .filter_map(|(label, value)| {
            value.map(|v| format!("      <p><strong>{label}:</strong> {}</p>\n", escape(v)))
        })
        .collect()
}

/// Submissions are user input and land in HTML.
fn escape(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
