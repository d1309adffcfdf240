/// Endpoint served by the CTIR core (not part of this crate)
pub const INDICATOR_ENDPOINT: &str = "http://localhost:3001/model-indicator";

/// Lines printed under every panel frame
pub const FRAME_HINTS: &str = "\

This is how CTIR model indicator would appear in Claude Code footer
Real integration would show this information continuously

Press Ctrl+C to stop...";

/// Printed after Ctrl+C ends the demo
pub const FAREWELL: &str = "\


👋 Demo stopped. Thank you for testing CTIR integration!

To integrate this into your Claude Code:
1. Register ctir-footer-hook as a PostToolUse hook (see `ctir-footer examples`)
2. Use the API endpoint: http://localhost:3001/model-indicator
3. Follow the integration guide in docs/ctir-footer-integration.md";

/// Usage shown for a missing or unknown subcommand
pub const USAGE: &str = "\
CTIR Footer Integration Demo
Usage: ctir-footer [demo|examples|status]

Commands:
  demo     - Simulate Claude Code footer with CTIR indicator
  examples - Show integration examples
  status   - Print the current indicator once";

/// Static integration examples
pub const EXAMPLES: &str = r#"🎭 CTIR Integration Examples
========================================

1. Simple API Call:
   curl -s http://localhost:3001/model-indicator | jq -r '.indicator'

2. Bash Integration:
   CTIR_INDICATOR=$(curl -s http://localhost:3001/model-indicator | jq -r '.indicator')
   echo "CTIR: $CTIR_INDICATOR"

3. Python Integration:
   import requests
   response = requests.get('http://localhost:3001/model-indicator')
   print(response.json()['indicator'])

4. Continuous Monitoring:
   watch -n 5 'curl -s http://localhost:3001/model-indicator | jq -r ".indicator"'

5. cc-sessions Integration:
   Add to your statusline-script.sh:
   get_ctir_indicator() {
     ctir-footer status
   }

6. Claude Code Hook (~/.claude/settings.json):
   {
     "hooks": {
       "PostToolUse": [
         {
           "matcher": "*",
           "hooks": [{ "type": "command", "command": "ctir-footer-hook" }]
         }
       ]
     }
   }"#;
