use crate::models::User;

pub fn render_welcome(user: &User) -> String {
    let User {
        first_name,
        last_name,
        email,
        phone_number,
        ..
    } = user;
    format!(
        r#"<!DOCTYPE html>
<html>
<head><meta charset="utf-8"></head>
<body style="font-family: sans-serif; max-width: 600px; margin: 0 auto; padding: 20px;">
    <h2>Welcome, {first_name}!</h2>
    <p>We are thrilled to have you join us. Here's a summary of your details:</p>
    <table style="border-collapse: collapse; font-size: 16px; width: 100%;">
        <tr>
            <td style="padding: 8px;"><strong>First Name:</strong></td>
            <td style="padding: 8px;">{first_name}</td>
        </tr>
        <tr>
            <td style="padding: 8px;"><strong>Last Name:</strong></td>
            <td style="padding: 8px;">{last_name}</td>
        </tr>
        <tr>
            <td style="padding: 8px;"><strong>Email:</strong></td>
            <td style="padding: 8px;">{email}</td>
        </tr>
        <tr>
            <td style="padding: 8px;"><strong>Phone Number:</strong></td>
            <td style="padding: 8px;">{phone_number}</td>
        </tr>
    </table>
    <p style="color: #666; font-size: 14px;">If you didn't register on our platform, please ignore this email.</p>
</body>
</html>"#
    )
}
