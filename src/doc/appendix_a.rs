/*!
# Reports

Every direct command and every program run ends with a report,
`<code>/<line>`. The line is zero for a direct command.

| Code | Meaning |
|---|---|
| `0` | Finished |
| `1` | `NEXT` without `FOR` |
| `2` | Variable not found |
| `3` | Subscript out of range, also reading past the last `DATA` and bad slot numbers |
| `4` | Out of memory |
| `5` | Display full |
| `6` | Arithmetic overflow |
| `7` | `RETURN` without `GOSUB` |
| `8` | `INPUT` used outside a program |
| `9` | Stopped by `STOP`, break or a failed slot transfer |
| `C` | Syntax error |

After code `9` the line is where `CONT` will continue. After the
others it is the line that failed.

*/
