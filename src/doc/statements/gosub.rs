/*!
# `GOSUB <line number>`

## Purpose
Calls a subroutine.

## Remarks
Execution moves to `<line number>` and `RETURN` comes back to the
line after the `GOSUB`. A line number that doesn't exist goes to the
next line after it. Too many outstanding calls is `OUT OF MEMORY`.

## Example
```text
10 GOSUB 100
20 PRINT "BACK"
30 STOP
100 PRINT "SUB"
110 RETURN
RUN
SUB
BACK
9/100
```

*/
